use log::{debug, warn};
use schem_types::TagTree;

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::tag_decoder::TagDecoder;
use crate::warning::DecodeWarning;

/// A decoded tag tree plus any non-fatal findings.
///
/// ```text
/// ┌─────────────────────────────────────────────────────┐
/// │ DecodedTree                                         │
/// │   tree:     TagTree            ← named root compound │
/// │   warnings: Vec<DecodeWarning> ← in stream order     │
/// └─────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedTree {
    pub tree: TagTree,
    pub warnings: Vec<DecodeWarning>,
}

/// Synchronous decoder for an already-decompressed tag-tree buffer.
///
/// Each call works on its own buffer and owns everything it produces,
/// so independent calls can run on different threads without locking.
///
/// # Example
///
/// ```rust
/// use schem_decoder::SchemDecoder;
///
/// // Root compound named "" holding Int "Version" = 6.
/// let bytes = [
///     0x0A, 0x00, 0x00,
///     0x03, 0x00, 0x07, b'V', b'e', b'r', b's', b'i', b'o', b'n', 0, 0, 0, 6,
///     0x00,
/// ];
/// let decoded = SchemDecoder::decode(&bytes).unwrap();
/// assert_eq!(decoded.tree.root.get("Version").and_then(|t| t.as_i32()), Some(6));
/// ```
pub struct SchemDecoder;

impl SchemDecoder {
    /// Decode with [`DecoderConfig::default`].
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`]; no partial tree is returned.
    pub fn decode(buf: &[u8]) -> Result<DecodedTree, DecodeError> {
        Self::decode_with_config(buf, &DecoderConfig::default())
    }

    /// Decode the root compound of `buf`.
    ///
    /// Bytes left after the root compound do not fail the decode; they
    /// are reported as [`DecodeWarning::TrailingBytes`].
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`]; no partial tree is returned.
    pub fn decode_with_config(
        buf: &[u8],
        config: &DecoderConfig,
    ) -> Result<DecodedTree, DecodeError> {
        let mut decoder = TagDecoder::new(buf, config);
        let tree = decoder.read_root()?;

        let trailing = decoder.remaining();
        let mut warnings = decoder.into_warnings();
        if trailing > 0 {
            warn!("{trailing} trailing bytes after root compound");
            warnings.push(DecodeWarning::TrailingBytes { count: trailing });
        }

        debug!(
            "decoded {} bytes into tree with {} root entries",
            buf.len(),
            tree.root.len()
        );
        Ok(DecodedTree { tree, warnings })
    }
}

#[cfg(test)]
mod tests {
    use schem_types::{Tag, TagType};

    use super::*;

    const EMPTY_ROOT: [u8; 4] = [0x0A, 0x00, 0x00, 0x00];

    #[test]
    fn empty_root() {
        let decoded = SchemDecoder::decode(&EMPTY_ROOT).unwrap();
        assert!(decoded.tree.name.is_empty());
        assert!(decoded.tree.root.is_empty());
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn named_root() {
        let bytes = [0x0A, 0x00, 0x03, b'a', b'b', b'c', 0x00];
        let decoded = SchemDecoder::decode(&bytes).unwrap();
        assert_eq!(decoded.tree.name, "abc");
    }

    #[test]
    fn trailing_bytes_warn() {
        let mut bytes = EMPTY_ROOT.to_vec();
        bytes.extend_from_slice(&[0xDE, 0xAD]);
        let decoded = SchemDecoder::decode(&bytes).unwrap();
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::TrailingBytes { count: 2 }]
        );
    }

    #[test]
    fn empty_input_is_truncated() {
        assert!(matches!(
            SchemDecoder::decode(&[]),
            Err(DecodeError::Truncated { offset: 0, .. })
        ));
    }

    #[test]
    fn malformed_string_warns_and_keeps_lossy_text() {
        let bytes = [
            0x0A, 0x00, 0x00, //
            0x08, 0x00, 0x01, b's', 0x00, 0x02, b'a', 0xFF, //
            0x00,
        ];
        let decoded = SchemDecoder::decode(&bytes).unwrap();
        let value = decoded.tree.root.get("s").and_then(Tag::as_str).unwrap();
        assert!(value.starts_with('a'));
        assert!(matches!(
            decoded.warnings.as_slice(),
            [DecodeWarning::MalformedString { offset: 7, .. }]
        ));
    }

    #[test]
    fn decode_is_deterministic() {
        let bytes = [
            0x0A, 0x00, 0x00, //
            0x09, 0x00, 0x01, b'l', 0x01, 0, 0, 0, 2, 0x05, 0x06, //
            0x00,
        ];
        let first = SchemDecoder::decode(&bytes).unwrap();
        let second = SchemDecoder::decode(&bytes).unwrap();
        assert_eq!(first, second);
        let list = first.tree.root.get("l").and_then(Tag::as_list).unwrap();
        assert_eq!(list.element_type, TagType::Byte);
        assert_eq!(list.items, vec![Tag::Byte(5), Tag::Byte(6)]);
    }
}
