#![no_main]

use libfuzzer_sys::fuzz_target;
use schem_decoder::DecoderConfig;

// Fuzz target: the whole pipeline, gzip included.
//
// The decompression cap is kept small so a fuzzed gzip bomb fails fast
// with TooLarge instead of exhausting memory.
fuzz_target!(|data: &[u8]| {
    let config = DecoderConfig {
        max_decompressed_size: 1 << 20,
        ..DecoderConfig::default()
    };
    let _ = schem_binder::load_schematic_with_config(data, &config);
});
