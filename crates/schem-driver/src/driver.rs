use schem_types::Schematic;

use crate::config::{OutputMode, RenderConfig};
use crate::error::DriverError;
use crate::render_json::JsonRenderer;
use crate::render_text::TextRenderer;

/// Renders a bound [`Schematic`] for display.
///
/// ```text
/// Schematic ──▶ SchematicDriver::render() ──▶ String
///                       │
///                 RenderConfig
///                 (mode, color, show_palette)
/// ```
pub trait SchematicDriver {
    /// # Errors
    ///
    /// Returns [`DriverError`] if the chosen output format cannot be
    /// produced.
    fn render(&self, schematic: &Schematic, config: &RenderConfig) -> Result<String, DriverError>;
}

/// Dispatches to [`TextRenderer`] or [`JsonRenderer`] by
/// [`RenderConfig::mode`].
pub struct DefaultDriver;

impl SchematicDriver for DefaultDriver {
    fn render(&self, schematic: &Schematic, config: &RenderConfig) -> Result<String, DriverError> {
        match config.mode {
            OutputMode::Text => Ok(TextRenderer::render(schematic, config)),
            OutputMode::Json => JsonRenderer::render(schematic, config),
        }
    }
}
