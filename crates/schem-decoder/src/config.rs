/// Default maximum nesting depth of Compound and List containers.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default ceiling on gzip output: 256 MiB.
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 256 * 1024 * 1024;

/// Limits applied while decoding a buffer.
///
/// ```text
/// ┌────────────────────────┬──────────┬──────────────────────────────────┐
/// │ Field                  │ Default  │ Guards against                   │
/// ├────────────────────────┼──────────┼──────────────────────────────────┤
/// │ max_depth              │ 512      │ stack exhaustion from deep nests │
/// │ max_decompressed_size  │ 256 MiB  │ gzip bombs                       │
/// └────────────────────────┴──────────┴──────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Deepest allowed container nesting; the root compound is depth 1.
    pub max_depth: usize,

    /// Largest decompressed buffer accepted from a gzip stream.
    pub max_decompressed_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
        }
    }
}
