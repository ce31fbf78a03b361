use schem_types::Schematic;
use serde_json::Value;

use crate::config::RenderConfig;
use crate::error::DriverError;

/// Pretty-printed JSON of the bound model, field names in snake case.
///
/// With `show_palette` off the `block_state_palette` arrays are dropped
/// from every region rather than emptied, so consumers can tell the
/// difference from a region with no palette.
pub struct JsonRenderer;

impl JsonRenderer {
    /// # Errors
    ///
    /// [`DriverError::Json`] if serialisation fails.
    pub fn render(schematic: &Schematic, config: &RenderConfig) -> Result<String, DriverError> {
        let mut value = serde_json::to_value(schematic)?;
        if !config.show_palette {
            if let Some(regions) = value.get_mut("regions").and_then(Value::as_array_mut) {
                for region in regions.iter_mut().filter_map(Value::as_object_mut) {
                    region.remove("block_state_palette");
                }
            }
        }
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

#[cfg(test)]
mod tests {
    use schem_types::{BlockState, Metadata, Region, Vec3};

    use super::*;
    use crate::config::OutputMode;

    fn schematic() -> Schematic {
        Schematic {
            metadata: Metadata {
                enclosing_size: Vec3::new(1, 1, 1),
                author: String::new(),
                description: String::new(),
                name: "Tiny".into(),
                region_count: 1,
                time_created: 0,
                time_modified: 0,
                total_blocks: 1,
                total_volume: 1,
            },
            regions: vec![Region {
                name: "Main".into(),
                position: Vec3::default(),
                size: Vec3::new(1, 1, 1),
                block_state_palette: vec![BlockState {
                    name: "minecraft:stone".into(),
                }],
            }],
            version: 6,
            sub_version: 0,
            minecraft_data_version: 0,
        }
    }

    fn json(show_palette: bool) -> Value {
        let config = RenderConfig {
            mode: OutputMode::Json,
            color: true,
            show_palette,
        };
        let text = JsonRenderer::render(&schematic(), &config).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn includes_palette_by_default() {
        let value = json(true);
        assert_eq!(value["metadata"]["name"], "Tiny");
        assert_eq!(
            value["regions"][0]["block_state_palette"][0]["name"],
            "minecraft:stone"
        );
    }

    #[test]
    fn drops_palette_when_hidden() {
        let value = json(false);
        assert!(value["regions"][0].get("block_state_palette").is_none());
        assert_eq!(value["regions"][0]["name"], "Main");
    }

    #[test]
    fn json_has_no_ansi() {
        let config = RenderConfig {
            mode: OutputMode::Json,
            ..RenderConfig::default()
        };
        let text = JsonRenderer::render(&schematic(), &config).unwrap();
        assert!(!text.contains('\x1b'));
    }
}
