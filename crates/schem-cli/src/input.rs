// Reading a schematic file and unwrapping its gzip container.
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use schem_decoder::decompression::unwrap_container;
use schem_decoder::{DecoderConfig, DecompressError};

/// A file's bytes before and after decompression.
#[derive(Debug)]
pub struct Input {
    pub file_size: usize,
    pub gzipped: bool,
    pub raw: Vec<u8>,
}

impl Input {
    /// Unwrap the container of a file already read into memory.
    ///
    /// # Errors
    ///
    /// [`DecompressError`] if gzip input fails to decompress.
    pub fn from_bytes(bytes: Vec<u8>, config: &DecoderConfig) -> Result<Self, DecompressError> {
        let file_size = bytes.len();
        let decompressed = match unwrap_container(&bytes, config.max_decompressed_size)? {
            Cow::Owned(raw) => Some(raw),
            Cow::Borrowed(_) => None,
        };
        Ok(match decompressed {
            Some(raw) => Self {
                file_size,
                gzipped: true,
                raw,
            },
            None => Self {
                file_size,
                gzipped: false,
                raw: bytes,
            },
        })
    }
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

/// Read `path` and gunzip it if it carries the gzip magic.
pub fn read_raw(path: &Path, config: &DecoderConfig) -> Result<Input> {
    Input::from_bytes(read_bytes(path)?, config)
        .with_context(|| format!("failed to decompress {}", path.display()))
}
