// Copyright (c) 2023 Yuki Kishimoto
// Distributed under the MIT software license

//! Output artifacts: address list, private key list and pywallet import
//! script, one line per key, in chain order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bitcoin::Network;

use crate::keys::KeyPair;

pub const PUBLIC_KEYS_FILE: &str = "public.keys";
pub const PRIVATE_KEYS_FILE: &str = "private.keys";
pub const IMPORT_SCRIPT_FILE: &str = "pywallet_doimport.sh";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletFiles {
    pub public_keys: PathBuf,
    pub private_keys: PathBuf,
    pub import_script: PathBuf,
}

impl WalletFiles {
    fn new(dir: &Path) -> Self {
        Self {
            public_keys: dir.join(PUBLIC_KEYS_FILE),
            private_keys: dir.join(PRIVATE_KEYS_FILE),
            import_script: dir.join(IMPORT_SCRIPT_FILE),
        }
    }
}

/// Write the three output files. Any failure aborts the run: the whole
/// generation is cheap to repeat, so no partial-file cleanup is done.
pub fn wallet<P>(dir: P, network: Network, keys: &[KeyPair]) -> Result<WalletFiles, Error>
where
    P: AsRef<Path>,
{
    let files = WalletFiles::new(dir.as_ref());

    let mut public = BufWriter::new(File::create(&files.public_keys)?);
    let mut private = BufWriter::new(File::create(&files.private_keys)?);
    let mut script = BufWriter::new(File::create(&files.import_script)?);

    writeln!(script, "#!/bin/bash")?;
    writeln!(script)?;
    writeln!(
        script,
        "# Executing this script will import all of your private keys into wallet.dat"
    )?;

    let mut import: String = String::from("./pywallet.py");
    if network != Network::Bitcoin {
        import.push_str(" --testnet");
    }
    import.push_str(" --importprivkey=");

    for key in keys.iter() {
        let wif: String = key.to_wif(network);
        writeln!(public, "{}", key.address(network))?;
        writeln!(private, "{wif}")?;
        writeln!(script, "{import}{wif}")?;
    }

    public.flush()?;
    private.flush()?;
    script.flush()?;

    Ok(files)
}
