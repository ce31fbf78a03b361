use schem_types::TagType;
use schem_wire::WireError;

/// Errors that abort a tag-tree decode.
///
/// Decoding is all-or-nothing: the first error ends the decode and no
/// partial tree is returned. Every variant carries the byte offset where
/// the problem was found.
///
/// ```text
///   DecodeError
///   ├── Truncated          ← fewer bytes left than a read needed
///   ├── NegativeLength     ← Int32 length prefix below zero
///   ├── UnknownTagType     ← type id outside 0x00–0x0C
///   ├── DepthExceeded      ← container nesting past DecoderConfig::max_depth
///   ├── UntypedList        ← List of End with a non-zero count
///   └── RootNotCompound    ← outermost tag is not a Compound
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("truncated input at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("negative length {length} at offset {offset}")]
    NegativeLength { offset: usize, length: i32 },

    #[error("unknown tag type {id:#04X} at offset {offset}")]
    UnknownTagType { id: u8, offset: usize },

    /// Nesting went past the configured limit. Raised before recursing,
    /// so deep input cannot exhaust the call stack.
    #[error("nesting depth exceeds {max} at offset {offset}")]
    DepthExceeded { max: usize, offset: usize },

    /// A List declared element type End but a count above zero; End has
    /// no payload, so such a list cannot be read.
    #[error("list of End tags with count {count} at offset {offset}")]
    UntypedList { count: usize, offset: usize },

    #[error("root tag must be a Compound, found {found} at offset {offset}")]
    RootNotCompound { found: TagType, offset: usize },
}

impl From<WireError> for DecodeError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::Truncated {
                offset,
                needed,
                remaining,
            } => Self::Truncated {
                offset,
                needed,
                remaining,
            },
            WireError::NegativeLength { offset, length } => Self::NegativeLength { offset, length },
        }
    }
}
