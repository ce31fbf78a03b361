use schem_decoder::{DecodeError, DecompressError};
use schem_types::TagType;

use crate::path::FieldPath;

/// The tree decoded but does not have the expected shape.
///
/// Only required fields produce errors. A wrong tag type is always an
/// error, even for optional fields: values are never coerced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required field {path}")]
    MissingField { path: FieldPath },

    #[error("field {path} has type {found}, expected {expected}")]
    TypeMismatch {
        path: FieldPath,
        expected: TagType,
        found: TagType,
    },
}

/// Every way loading a schematic file's bytes can fail.
///
/// ```text
///   SchematicError
///   ├── Decompress(DecompressError) ← gzip framing invalid or too large
///   ├── Decode(DecodeError)         ← tag-tree grammar violated
///   └── Schema(SchemaError)         ← tree lacks a required field
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SchematicError {
    #[error(transparent)]
    Decompress(#[from] DecompressError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
