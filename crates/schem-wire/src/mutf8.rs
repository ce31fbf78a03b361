//! Modified UTF-8 (Java `DataInput` flavour) text decoding.
//!
//! Differs from standard UTF-8 in two ways: NUL is written as the two-byte
//! sequence `C0 80`, and supplementary characters are written as a pair of
//! three-byte surrogate encodings (CESU-8). Plain ASCII is identical in
//! both, which is what almost every block name and metadata field uses.

use cesu8::from_java_cesu8;

/// Text read from a length-prefixed string field.
///
/// `raw` is `Some` only when the bytes were not valid modified UTF-8; in
/// that case `text` is a lossy conversion meant for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedText {
    text: String,
    raw: Option<Vec<u8>>,
}

impl DecodedText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether decoding failed and `text` is a lossy stand-in.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.raw.is_some()
    }

    /// The original bytes, retained only for malformed text.
    #[must_use]
    pub fn raw(&self) -> Option<&[u8]> {
        self.raw.as_deref()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Decode `bytes` as modified UTF-8, falling back to a lossy conversion.
#[must_use]
pub fn decode(bytes: &[u8]) -> DecodedText {
    match from_java_cesu8(bytes) {
        Ok(text) => DecodedText {
            text: text.into_owned(),
            raw: None,
        },
        Err(_) => DecodedText {
            text: String::from_utf8_lossy(bytes).into_owned(),
            raw: Some(bytes.to_vec()),
        },
    }
}
