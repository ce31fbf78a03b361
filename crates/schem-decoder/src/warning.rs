use std::fmt;

/// A non-fatal irregularity found while decoding.
///
/// Warnings never change the shape of the returned tree; they are handed
/// back next to it (and logged) so callers can surface them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeWarning {
    /// A string was not valid modified UTF-8. `lossy` is what was stored.
    MalformedString { offset: usize, lossy: String },

    /// A compound repeated a name; the later value replaced the earlier.
    DuplicateKey { name: String, offset: usize },

    /// Bytes followed the root compound.
    TrailingBytes { count: usize },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedString { offset, lossy } => {
                write!(f, "malformed modified UTF-8 at offset {offset}, read as {lossy:?}")
            }
            Self::DuplicateKey { name, offset } => {
                write!(f, "duplicate key {name:?} at offset {offset}, later value kept")
            }
            Self::TrailingBytes { count } => {
                write!(f, "{count} trailing bytes after root compound")
            }
        }
    }
}
