#![no_main]

use libfuzzer_sys::fuzz_target;
use schem_decoder::{DecoderConfig, SchemDecoder};

// Fuzz target: tag-tree decoding of arbitrary bytes.
//
// Catches bugs in:
// - Length prefixes that overrun the buffer
// - Huge declared counts allocated before validation
// - Deep nesting that escapes the depth guard
// - Invalid modified UTF-8
fuzz_target!(|data: &[u8]| {
    let config = DecoderConfig {
        max_depth: 64,
        ..DecoderConfig::default()
    };
    if let Ok(decoded) = SchemDecoder::decode_with_config(data, &config) {
        let stats = decoded.tree.stats();
        assert!(stats.max_depth <= 64);
        let _ = schem_driver::TreeRenderer::render(&decoded.tree, Some(8));
    }
});
