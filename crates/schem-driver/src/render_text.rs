use schem_types::{Region, Schematic};

use crate::config::RenderConfig;
use crate::style::Style;

/// Console layout of a bound schematic.
///
/// Example output (colour off):
///
/// ```text
/// Metadata
///   Author: Steve
///   Name: House
///   Description:
///   Region Count: 1
///   Time Created: 1700000000000
///   Time Modified: 1700000360000
///   Enclosing Size: X: 5, Y: 4, Z: 5
///   Total Blocks: 42
///   Total Volume: 100
///   Version: 6
///   Sub Version: 1
///   Minecraft Data Version: 3700
///
/// Region: Main
///   Position: X: 0, Y: 0, Z: 0
///   Size: X: 5, Y: 4, Z: -5
///   Palette: 2 entries
///     [0] minecraft:air
///     [1] minecraft:stone
/// ```
///
/// Sections are separated by one blank line and the output has no
/// trailing newline.
pub struct TextRenderer;

impl TextRenderer {
    #[must_use]
    pub fn render(schematic: &Schematic, config: &RenderConfig) -> String {
        let style = Style::new(config.color);
        let mut sections = Vec::with_capacity(schematic.regions.len() + 1);
        sections.push(Self::render_metadata(schematic, style));
        for region in &schematic.regions {
            sections.push(Self::render_region(region, style, config.show_palette));
        }
        sections.join("\n\n")
    }

    fn render_metadata(schematic: &Schematic, style: Style) -> String {
        let meta = &schematic.metadata;
        let fields = [
            ("Author", meta.author.clone()),
            ("Name", meta.name.clone()),
            ("Description", meta.description.clone()),
            ("Region Count", meta.region_count.to_string()),
            ("Time Created", meta.time_created.to_string()),
            ("Time Modified", meta.time_modified.to_string()),
            ("Enclosing Size", meta.enclosing_size.to_string()),
            ("Total Blocks", meta.total_blocks.to_string()),
            ("Total Volume", meta.total_volume.to_string()),
            ("Version", schematic.version.to_string()),
            ("Sub Version", schematic.sub_version.to_string()),
            (
                "Minecraft Data Version",
                schematic.minecraft_data_version.to_string(),
            ),
        ];

        let mut lines = vec![style.header("Metadata")];
        lines.extend(
            fields
                .iter()
                .map(|(key, value)| format!("  {}", style.field(key, value))),
        );
        lines.join("\n")
    }

    fn render_region(region: &Region, style: Style, show_palette: bool) -> String {
        let palette = &region.block_state_palette;
        let count = match palette.len() {
            1 => "1 entry".to_owned(),
            n => format!("{n} entries"),
        };

        let mut lines = vec![
            format!("{} {}", style.header("Region:"), region.name),
            format!("  {}", style.field("Position", &region.position.to_string())),
            format!("  {}", style.field("Size", &region.size.to_string())),
            format!("  {}", style.field("Palette", &count)),
        ];
        if show_palette {
            lines.extend(
                palette
                    .iter()
                    .enumerate()
                    .map(|(i, state)| format!("    [{i}] {}", state.name)),
            );
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use schem_types::{BlockState, Metadata, Vec3};

    use super::*;
    use crate::config::OutputMode;

    fn schematic() -> Schematic {
        Schematic {
            metadata: Metadata {
                enclosing_size: Vec3::new(5, 4, 5),
                author: "Steve".into(),
                description: String::new(),
                name: "House".into(),
                region_count: 1,
                time_created: 1_700_000_000_000,
                time_modified: 1_700_000_360_000,
                total_blocks: 42,
                total_volume: 100,
            },
            regions: vec![Region {
                name: "Main".into(),
                position: Vec3::new(0, 0, 0),
                size: Vec3::new(5, 4, -5),
                block_state_palette: vec![
                    BlockState {
                        name: "minecraft:air".into(),
                    },
                    BlockState {
                        name: "minecraft:stone".into(),
                    },
                ],
            }],
            version: 6,
            sub_version: 1,
            minecraft_data_version: 3700,
        }
    }

    fn plain(show_palette: bool) -> RenderConfig {
        RenderConfig {
            mode: OutputMode::Text,
            color: false,
            show_palette,
        }
    }

    #[test]
    fn renders_plain_text() {
        insta::assert_snapshot!(TextRenderer::render(&schematic(), &plain(true)), @r"
        Metadata
          Author: Steve
          Name: House
          Description:
          Region Count: 1
          Time Created: 1700000000000
          Time Modified: 1700000360000
          Enclosing Size: X: 5, Y: 4, Z: 5
          Total Blocks: 42
          Total Volume: 100
          Version: 6
          Sub Version: 1
          Minecraft Data Version: 3700

        Region: Main
          Position: X: 0, Y: 0, Z: 0
          Size: X: 5, Y: 4, Z: -5
          Palette: 2 entries
            [0] minecraft:air
            [1] minecraft:stone
        ");
    }

    #[test]
    fn hides_palette_entries() {
        let text = TextRenderer::render(&schematic(), &plain(false));
        assert!(text.ends_with("Palette: 2 entries"));
        assert!(!text.contains("minecraft:air"));
    }

    #[test]
    fn no_trailing_whitespace() {
        let text = TextRenderer::render(&schematic(), &plain(true));
        assert!(!text.ends_with('\n'));
        assert!(text.lines().all(|line| !line.ends_with(' ')));
    }

    #[test]
    fn colour_wraps_headers_and_fields() {
        let config = RenderConfig::default();
        let text = TextRenderer::render(&schematic(), &config);
        assert!(text.starts_with("\x1b[33mMetadata\x1b[0m"));
        assert!(text.contains("\x1b[36mAuthor:\x1b[0m \x1b[32mSteve\x1b[0m"));
    }
}
