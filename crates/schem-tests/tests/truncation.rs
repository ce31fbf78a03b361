//! Every strict prefix of a valid file must fail with `Truncated`.
//!
//! The decoder reads length prefixes from untrusted input, so a cut
//! anywhere (inside a name, a length, an array body or before a closing
//! End) has to be detected rather than read past or misparsed.

use schem_binder::{SchematicError, load_schematic};
use schem_decoder::{DecodeError, SchemDecoder};
use schem_tests::{TagWriter, all_types_tree, sample_bytes};

fn assert_every_prefix_truncated(bytes: &[u8]) {
    for len in 0..bytes.len() {
        match SchemDecoder::decode(&bytes[..len]) {
            Err(DecodeError::Truncated {
                offset,
                needed,
                remaining,
            }) => {
                assert!(offset <= len, "prefix {len}: offset {offset} past end");
                assert!(needed > remaining, "prefix {len}: {needed} <= {remaining}");
            }
            other => panic!("prefix {len}: expected Truncated, got {other:?}"),
        }
    }
}

#[test]
fn every_prefix_is_truncated() {
    assert_every_prefix_truncated(&sample_bytes());
}

#[test]
fn every_prefix_of_all_types_is_truncated() {
    // floats, doubles and every array width, which the sample lacks
    let bytes = TagWriter::encode_tree(&all_types_tree());
    assert!(SchemDecoder::decode(&bytes).is_ok());
    assert_every_prefix_truncated(&bytes);
}

#[test]
fn full_input_decodes() {
    assert!(SchemDecoder::decode(&sample_bytes()).is_ok());
}

#[test]
fn truncated_raw_file_fails_load_at_decode_stage() {
    let bytes = sample_bytes();
    let err = load_schematic(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(
        err,
        SchematicError::Decode(DecodeError::Truncated { .. })
    ));
}
