/// Implementation of `schem tree`.
///
/// Decodes the file without binding it, so this works on any tag-tree
/// file, not only schematics.
use anyhow::{Context, Result};
use schem_decoder::{DecoderConfig, SchemDecoder};
use schem_driver::TreeRenderer;

use crate::TreeArgs;
use crate::input::read_raw;

/// # Errors
///
/// Returns an error if the file cannot be read, decompressed or decoded.
pub fn run(args: &TreeArgs, config: &DecoderConfig) -> Result<()> {
    let input = read_raw(&args.file, config)?;
    let decoded = SchemDecoder::decode_with_config(&input.raw, config)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;
    println!("{}", TreeRenderer::render(&decoded.tree, args.depth));
    Ok(())
}
