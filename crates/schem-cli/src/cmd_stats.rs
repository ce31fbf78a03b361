/// Implementation of `schem stats`.
///
/// # Example output
///
/// ```text
/// File:    house.litematic  (1532 bytes, gzip)
/// Raw:     4096 bytes  (2.67x)
/// Root:    ""  (5 entries)
///
/// Type         Count
/// ──────────────────
/// Int             18
/// Long             3
/// String           6
/// List             1
/// Compound         9
/// LongArray        1
/// ──────────────────
/// Total           38
///
/// Max depth: 4
/// ```
use anyhow::{Context, Result};
use schem_decoder::{DecoderConfig, SchemDecoder};
use schem_types::TagType;

use crate::StatsArgs;
use crate::input::read_raw;

/// # Errors
///
/// Returns an error if the file cannot be read, decompressed or decoded.
pub fn run(args: &StatsArgs, config: &DecoderConfig) -> Result<()> {
    let input = read_raw(&args.file, config)?;
    let decoded = SchemDecoder::decode_with_config(&input.raw, config)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;
    let stats = decoded.tree.stats();

    let container = if input.gzipped { "gzip" } else { "uncompressed" };
    println!(
        "File:    {}  ({} bytes, {container})",
        args.file.display(),
        input.file_size
    );
    if input.gzipped {
        #[allow(clippy::cast_precision_loss)]
        let ratio = input.raw.len() as f64 / input.file_size.max(1) as f64;
        println!("Raw:     {} bytes  ({ratio:.2}x)", input.raw.len());
    }
    println!(
        "Root:    {:?}  ({} entries)",
        decoded.tree.name,
        decoded.tree.root.len()
    );
    println!();

    let rule = "─".repeat(18);
    println!("{:<12} {:>5}", "Type", "Count");
    println!("{rule}");
    for tag_type in TagType::ALL {
        let count = stats.count(tag_type);
        if count > 0 {
            println!("{:<12} {count:>5}", tag_type.name());
        }
    }
    println!("{rule}");
    println!("{:<12} {:>5}", "Total", stats.total);
    println!();
    println!("Max depth: {}", stats.max_depth);

    if !decoded.warnings.is_empty() {
        println!("Warnings:  {}", decoded.warnings.len());
    }
    Ok(())
}
