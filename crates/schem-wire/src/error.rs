/// Errors raised by [`ByteCursor`](crate::ByteCursor) reads.
///
/// Every variant carries the byte offset at which the failed read
/// started, so a corrupt file can be located without re-running the
/// decoder under instrumentation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// Fewer bytes remained than the read required.
    #[error("truncated input at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A signed 32-bit length prefix was negative.
    #[error("negative length {length} at offset {offset}")]
    NegativeLength { offset: usize, length: i32 },
}
