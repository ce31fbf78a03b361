/// How a bound schematic is presented.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────┐
/// │ Field        │ Purpose                                          │
/// ├──────────────┼──────────────────────────────────────────────────┤
/// │ mode         │ Human-readable text or machine-readable JSON     │
/// │ color        │ ANSI colour in text mode (ignored for JSON)      │
/// │ show_palette │ List every palette entry, or only the count      │
/// └──────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub mode: OutputMode,
    pub color: bool,
    pub show_palette: bool,
}

impl Default for RenderConfig {
    /// Coloured text with the full palette.
    fn default() -> Self {
        Self {
            mode: OutputMode::Text,
            color: true,
            show_palette: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// `Key: value` lines grouped by section.
    #[default]
    Text,
    /// Pretty-printed JSON of the whole model.
    Json,
}
