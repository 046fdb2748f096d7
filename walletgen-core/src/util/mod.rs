// Copyright (c) 2023 Yuki Kishimoto
// Distributed under the MIT software license

pub mod hex;
