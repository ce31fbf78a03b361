/// Implementation of `schem validate`.
///
/// Runs each stage on its own and prints a `✓` line per stage that
/// passes, `!` per non-fatal warning, and a single `✗` line for the
/// stage that fails.
///
/// # Success output
///
/// ```text
/// ✓ Container: gzip, 1532 → 4096 bytes
/// ✓ Tag tree: 38 tags, max depth 4
/// ✓ Schema: 1 region bound
/// ```
///
/// # Failure output
///
/// ```text
/// ✓ Container: gzip, 1532 → 4096 bytes
/// ✓ Tag tree: 12 tags, max depth 2
/// ✗ Error: missing required field Regions
/// ```
use anyhow::{Result, anyhow};
use schem_binder::SchemaBinder;
use schem_decoder::{DecoderConfig, SchemDecoder};

use crate::ValidateArgs;
use crate::input::{Input, read_bytes};

/// # Errors
///
/// Returns an error if the file cannot be read or any stage fails.
pub fn run(args: &ValidateArgs, config: &DecoderConfig) -> Result<()> {
    let input = Input::from_bytes(read_bytes(&args.file)?, config).map_err(fail)?;
    if input.gzipped {
        println!(
            "✓ Container: gzip, {} → {} bytes",
            input.file_size,
            input.raw.len()
        );
    } else {
        println!("✓ Container: uncompressed, {} bytes", input.file_size);
    }

    let decoded = SchemDecoder::decode_with_config(&input.raw, config).map_err(fail)?;
    let stats = decoded.tree.stats();
    println!(
        "✓ Tag tree: {} tags, max depth {}",
        stats.total, stats.max_depth
    );
    for warning in &decoded.warnings {
        println!("! Warning: {warning}");
    }

    let binding = SchemaBinder::bind(&decoded.tree).map_err(fail)?;
    let regions = binding.schematic.regions.len();
    println!(
        "✓ Schema: {regions} region{} bound",
        if regions == 1 { "" } else { "s" }
    );
    for warning in &binding.warnings {
        println!("! Warning: {warning}");
    }
    Ok(())
}

fn fail(e: impl std::fmt::Display) -> anyhow::Error {
    println!("✗ Error: {e}");
    anyhow!("validation failed")
}
