#![no_main]

use libfuzzer_sys::fuzz_target;
use schem_decoder::SchemDecoder;
use schem_tests::TagWriter;

// Fuzz target: decode → encode → decode.
//
// Any input that decodes cleanly must re-encode to bytes that decode to
// the same encoding again. Bytes are compared rather than trees so NaN
// floats do not trip equality.
fuzz_target!(|data: &[u8]| {
    let Ok(first) = SchemDecoder::decode(data) else {
        return;
    };
    if !first.warnings.is_empty() {
        return;
    }
    let encoded = TagWriter::encode_tree(&first.tree);
    let second = SchemDecoder::decode(&encoded).unwrap();
    assert_eq!(TagWriter::encode_tree(&second.tree), encoded);
});
