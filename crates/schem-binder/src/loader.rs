use schem_decoder::decompression::unwrap_container;
use schem_decoder::{DecodeWarning, DecoderConfig, SchemDecoder};
use schem_types::{Schematic, TagTree};

use crate::binder::SchemaBinder;
use crate::error::SchematicError;
use crate::warning::BindWarning;

/// Everything produced by one load: the model, the tree it came from
/// and the non-fatal findings of both stages.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedSchematic {
    pub schematic: Schematic,
    pub tree: TagTree,
    pub decode_warnings: Vec<DecodeWarning>,
    pub bind_warnings: Vec<BindWarning>,
}

impl LoadedSchematic {
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.decode_warnings.is_empty() || !self.bind_warnings.is_empty()
    }
}

/// Load with [`DecoderConfig::default`].
///
/// # Errors
///
/// See [`load_schematic_with_config`].
pub fn load_schematic(bytes: &[u8]) -> Result<LoadedSchematic, SchematicError> {
    load_schematic_with_config(bytes, &DecoderConfig::default())
}

/// Run the whole pipeline over the contents of a schematic file.
///
/// Gzip input is decompressed first; anything else is taken to be an
/// already-decompressed tag tree.
///
/// # Errors
///
/// The first stage to fail determines the [`SchematicError`] variant.
pub fn load_schematic_with_config(
    bytes: &[u8],
    config: &DecoderConfig,
) -> Result<LoadedSchematic, SchematicError> {
    let raw = unwrap_container(bytes, config.max_decompressed_size)?;
    let decoded = SchemDecoder::decode_with_config(&raw, config)?;
    let binding = SchemaBinder::bind(&decoded.tree)?;

    Ok(LoadedSchematic {
        schematic: binding.schematic,
        tree: decoded.tree,
        decode_warnings: decoded.warnings,
        bind_warnings: binding.warnings,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use schem_decoder::{DecodeError, DecompressError};

    use super::*;
    use crate::error::SchemaError;

    // Root with Metadata{TimeCreated,TimeModified,TotalBlocks,TotalVolume,
    // EnclosingSize} and an empty Regions compound.
    fn minimal_file() -> Vec<u8> {
        fn named(out: &mut Vec<u8>, id: u8, name: &str) {
            out.push(id);
            out.extend_from_slice(&u16::try_from(name.len()).unwrap().to_be_bytes());
            out.extend_from_slice(name.as_bytes());
        }

        let mut out = Vec::new();
        named(&mut out, 10, "");
        named(&mut out, 10, "Metadata");
        for key in ["TimeCreated", "TimeModified"] {
            named(&mut out, 4, key);
            out.extend_from_slice(&7i64.to_be_bytes());
        }
        for key in ["TotalBlocks", "TotalVolume"] {
            named(&mut out, 3, key);
            out.extend_from_slice(&1i32.to_be_bytes());
        }
        named(&mut out, 10, "EnclosingSize");
        for key in ["x", "y", "z"] {
            named(&mut out, 3, key);
            out.extend_from_slice(&1i32.to_be_bytes());
        }
        out.push(0); // EnclosingSize
        out.push(0); // Metadata
        named(&mut out, 10, "Regions");
        out.push(0); // Regions
        out.push(0); // root
        out
    }

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn loads_raw_and_gzipped_alike() {
        let raw = minimal_file();
        let from_raw = load_schematic(&raw).unwrap();
        let from_gzip = load_schematic(&gzip(&raw)).unwrap();

        assert_eq!(from_raw, from_gzip);
        assert!(from_raw.schematic.regions.is_empty());
        assert_eq!(from_raw.schematic.metadata.region_count, 0);
        assert!(!from_raw.has_warnings());
    }

    #[test]
    fn corrupt_gzip_is_decompress_error() {
        let err = load_schematic(&[0x1F, 0x8B, 0x00, 0x01]).unwrap_err();
        assert!(matches!(
            err,
            SchematicError::Decompress(DecompressError::Corrupt(_))
        ));
    }

    #[test]
    fn truncated_tree_is_decode_error() {
        let raw = minimal_file();
        let err = load_schematic(&raw[..raw.len() - 1]).unwrap_err();
        assert!(matches!(
            err,
            SchematicError::Decode(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn empty_root_is_schema_error() {
        let err = load_schematic(&[0x0A, 0x00, 0x00, 0x00]).unwrap_err();
        assert!(matches!(
            err,
            SchematicError::Schema(SchemaError::MissingField { .. })
        ));
        assert_eq!(err.to_string(), "missing required field Metadata");
    }

    #[test]
    fn trailing_bytes_surface_as_decode_warning() {
        let mut raw = minimal_file();
        raw.push(0xFF);
        let loaded = load_schematic(&raw).unwrap();
        assert_eq!(
            loaded.decode_warnings,
            vec![DecodeWarning::TrailingBytes { count: 1 }]
        );
    }
}
