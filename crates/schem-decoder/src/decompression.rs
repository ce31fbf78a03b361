// Gzip decompression for schematic containers.
//
// Schematic files are a gzip stream wrapping the tag tree. The output is
// capped at a caller-supplied limit so a small file cannot expand into an
// unbounded allocation.
use std::borrow::Cow;
use std::io::Read;

use flate2::read::GzDecoder;

/// The two magic bytes that open every gzip member.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Errors from unwrapping the gzip container.
#[derive(Debug, thiserror::Error)]
pub enum DecompressError {
    /// The gzip framing or deflate stream is invalid.
    #[error("gzip decompression failed: {0}")]
    Corrupt(#[from] std::io::Error),

    /// The decompressed size passed `limit` bytes.
    #[error("decompressed size exceeds limit of {limit} bytes")]
    TooLarge { limit: usize },
}

/// Whether `data` starts with the gzip magic.
#[must_use]
pub fn is_gzip(data: &[u8]) -> bool {
    data.starts_with(&GZIP_MAGIC)
}

/// Decompress a gzip stream, refusing to produce more than `limit` bytes.
///
/// # Errors
///
/// - [`DecompressError::Corrupt`] if the stream is not valid gzip.
/// - [`DecompressError::TooLarge`] if the output would exceed `limit`.
pub fn gunzip(data: &[u8], limit: usize) -> Result<Vec<u8>, DecompressError> {
    let mut out = Vec::new();
    // Read one byte past the limit to tell "exactly at limit" from "over".
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    GzDecoder::new(data).take(cap).read_to_end(&mut out)?;

    if out.len() > limit {
        return Err(DecompressError::TooLarge { limit });
    }
    Ok(out)
}

/// Strip the gzip container if `data` has one.
///
/// Gzip input is decompressed under `limit`; anything else is returned
/// borrowed, as an already-decompressed tag tree.
///
/// # Errors
///
/// As [`gunzip`], for gzip input only.
pub fn unwrap_container(data: &[u8], limit: usize) -> Result<Cow<'_, [u8]>, DecompressError> {
    if !is_gzip(data) {
        return Ok(Cow::Borrowed(data));
    }
    let raw = gunzip(data, limit)?;
    log::debug!("gunzipped {} bytes into {}", data.len(), raw.len());
    Ok(Cow::Owned(raw))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn roundtrips_through_gzip() {
        let compressed = gzip(b"\x0a\x00\x00\x00");
        assert!(is_gzip(&compressed));
        assert_eq!(gunzip(&compressed, 1024).unwrap(), b"\x0a\x00\x00\x00");
    }

    #[test]
    fn output_at_limit_is_accepted() {
        let compressed = gzip(&[7u8; 64]);
        assert_eq!(gunzip(&compressed, 64).unwrap().len(), 64);
    }

    #[test]
    fn output_over_limit_is_rejected() {
        let compressed = gzip(&[0u8; 4096]);
        assert!(matches!(
            gunzip(&compressed, 1024),
            Err(DecompressError::TooLarge { limit: 1024 })
        ));
    }

    #[test]
    fn container_is_unwrapped_only_when_gzipped() {
        let plain = b"\x0a\x00\x00\x00";
        assert!(matches!(unwrap_container(plain, 1024), Ok(Cow::Borrowed(b)) if b == plain));

        let compressed = gzip(plain);
        match unwrap_container(&compressed, 1024).unwrap() {
            Cow::Owned(raw) => assert_eq!(raw, plain),
            Cow::Borrowed(_) => panic!("gzip input was not decompressed"),
        }
        assert!(matches!(
            unwrap_container(&gzip(&[0u8; 4096]), 1024),
            Err(DecompressError::TooLarge { limit: 1024 })
        ));
    }

    #[test]
    fn non_gzip_input_is_corrupt() {
        assert!(!is_gzip(b"\x0a\x00\x00"));
        assert!(matches!(
            gunzip(b"\x1f\x8b\x00garbage", 1024),
            Err(DecompressError::Corrupt(_))
        ));
    }
}
