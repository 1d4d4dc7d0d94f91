//! Hash Command
//!
//! String and file hashing for every Harmonia variant.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Read;
use std::path::PathBuf;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Algorithm {
    /// HARMONIA v2.2 (64 rounds, variable rotations)
    V2,
    /// HARMONIA-Fast (32 rounds)
    Fast,
    /// HARMONIA-NG (32 rounds, SIMD-friendly)
    Ng,
}

enum HasherWrapper {
    V2(harmonia::v2::Hasher),
    Fast(harmonia::fast::Hasher),
    Ng(harmonia::ng::Hasher),
}

impl HasherWrapper {
    fn new(algo: Algorithm) -> Self {
        match algo {
            Algorithm::V2 => Self::V2(harmonia::v2::Hasher::new()),
            Algorithm::Fast => Self::Fast(harmonia::fast::Hasher::new()),
            Algorithm::Ng => Self::Ng(harmonia::ng::Hasher::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::V2(h) => h.update(data),
            Self::Fast(h) => h.update(data),
            Self::Ng(h) => h.update(data),
        }
    }

    fn finalize(self) -> [u8; 32] {
        match self {
            Self::V2(h) => h.finalize(),
            Self::Fast(h) => h.finalize(),
            Self::Ng(h) => h.finalize(),
        }
    }
}

/// Hash literal string arguments, one digest per line.
pub fn hash_strings(inputs: &[String], algo: Algorithm) {
    for input in inputs {
        let mut hasher = HasherWrapper::new(algo);
        hasher.update(input.as_bytes());
        println!("{}", hex::encode(hasher.finalize()));
    }
}

/// Hash files through the streaming interface.
pub fn hash_files(files: &[PathBuf], algo: Algorithm) -> Result<()> {
    for file_path in files {
        let mut file = std::fs::File::open(file_path)
            .with_context(|| format!("Failed to open: {}", file_path.display()))?;

        let mut hasher = HasherWrapper::new(algo);
        let mut buffer = [0u8; 64 * 1024];

        loop {
            let n = file.read(&mut buffer)?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
        }

        println!(
            "{}  {}",
            hex::encode(hasher.finalize()),
            file_path.display()
        );
    }

    Ok(())
}
