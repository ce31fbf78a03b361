/// Implementation of `schem inspect`.
///
/// Loads the file through the full pipeline and prints the bound model as
/// text or JSON. Non-fatal findings are logged as warnings on stderr.
use anyhow::{Context, Result};
use schem_binder::load_schematic_with_config;
use schem_decoder::DecoderConfig;
use schem_driver::{DefaultDriver, RenderConfig, SchematicDriver};

use crate::InspectArgs;
use crate::input::read_bytes;

/// # Errors
///
/// Returns an error if the file cannot be read, fails to decompress,
/// decode or bind, or cannot be rendered.
pub fn run(args: &InspectArgs, config: &DecoderConfig, color: bool) -> Result<()> {
    let bytes = read_bytes(&args.file)?;
    let loaded = load_schematic_with_config(&bytes, config)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let render = RenderConfig {
        mode: args.format.into(),
        color,
        show_palette: !args.no_palette,
    };
    let output = DefaultDriver.render(&loaded.schematic, &render)?;
    println!("{output}");
    Ok(())
}
