#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod decompression;
pub mod error;
pub mod tag_decoder;
pub mod warning;

pub use config::DecoderConfig;
pub use decoder::{DecodedTree, SchemDecoder};
pub use decompression::DecompressError;
pub use error::DecodeError;
pub use tag_decoder::TagDecoder;
pub use warning::DecodeWarning;
