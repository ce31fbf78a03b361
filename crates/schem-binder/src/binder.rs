use log::{debug, warn};
use schem_types::{BlockState, Metadata, Region, Schematic, TagTree};

use crate::error::SchemaError;
use crate::view::CompoundView;
use crate::warning::BindWarning;

/// A bound schematic plus any non-fatal findings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub schematic: Schematic,
    pub warnings: Vec<BindWarning>,
}

/// Extracts the schematic model from a decoded [`TagTree`] by field name.
///
/// Binding never depends on where a field sits in the file, only on its
/// name and type. Fields the model does not know about are ignored, so
/// newer files with extra data still bind.
///
/// ```text
///   root
///   ├── Version, SubVersion, MinecraftDataVersion   Int, optional (0)
///   ├── Metadata                                    Compound, required
///   │   ├── Name, Author, Description               String, optional ("")
///   │   ├── TimeCreated, TimeModified               Long, required
///   │   ├── TotalBlocks, TotalVolume                Int, required
///   │   ├── EnclosingSize {x,y,z}                   Compound, required
///   │   └── RegionCount                             Int, optional (derived)
///   └── Regions                                     Compound, required
///       └── <region name>                           Compound
///           ├── Position {x,y,z}, Size {x,y,z}      Compound, required
///           └── BlockStatePalette[]                 List of Compound, required
///               └── Name                            String, required
/// ```
pub struct SchemaBinder;

impl SchemaBinder {
    /// Bind `tree` into a [`Schematic`]. The tree is not modified.
    ///
    /// # Errors
    ///
    /// [`SchemaError::MissingField`] for an absent required field and
    /// [`SchemaError::TypeMismatch`] for any field of the wrong type.
    /// The first problem found aborts binding.
    pub fn bind(tree: &TagTree) -> Result<Binding, SchemaError> {
        let root = CompoundView::root(&tree.root);
        let mut warnings = Vec::new();

        let metadata = root.required_compound("Metadata")?;
        let regions = bind_regions(&root.required_compound("Regions")?)?;
        let metadata = bind_metadata(&metadata, &regions, &mut warnings)?;

        let schematic = Schematic {
            metadata,
            regions,
            version: root.optional_i32("Version")?.unwrap_or(0),
            sub_version: root.optional_i32("SubVersion")?.unwrap_or(0),
            minecraft_data_version: root.optional_i32("MinecraftDataVersion")?.unwrap_or(0),
        };

        debug!(
            "bound schematic {:?} with {} regions",
            schematic.metadata.name,
            schematic.regions.len()
        );
        Ok(Binding {
            schematic,
            warnings,
        })
    }
}

fn bind_metadata(
    metadata: &CompoundView<'_>,
    regions: &[Region],
    warnings: &mut Vec<BindWarning>,
) -> Result<Metadata, SchemaError> {
    let actual = regions.len();
    let region_count = match metadata.optional_i32("RegionCount")? {
        Some(stated) => {
            if usize::try_from(stated).ok() != Some(actual) {
                warn!("Metadata.RegionCount is {stated} but {actual} regions were found");
                warnings.push(BindWarning::RegionCountMismatch { stated, actual });
            }
            stated
        }
        None => i32::try_from(actual).unwrap_or(i32::MAX),
    };

    Ok(Metadata {
        enclosing_size: metadata.required_vec3("EnclosingSize")?,
        author: metadata.optional_str("Author")?.unwrap_or_default().to_owned(),
        description: metadata
            .optional_str("Description")?
            .unwrap_or_default()
            .to_owned(),
        name: metadata.optional_str("Name")?.unwrap_or_default().to_owned(),
        region_count,
        time_created: metadata.required_i64("TimeCreated")?,
        time_modified: metadata.required_i64("TimeModified")?,
        total_blocks: metadata.required_i32("TotalBlocks")?,
        total_volume: metadata.required_i32("TotalVolume")?,
    })
}

fn bind_regions(regions: &CompoundView<'_>) -> Result<Vec<Region>, SchemaError> {
    regions
        .child_compounds()?
        .into_iter()
        .map(|(name, region)| bind_region(name, &region))
        .collect()
}

fn bind_region(name: &str, region: &CompoundView<'_>) -> Result<Region, SchemaError> {
    let block_state_palette = region
        .required_compound_list("BlockStatePalette")?
        .iter()
        .map(|entry| {
            Ok(BlockState {
                name: entry.required_str("Name")?.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, SchemaError>>()?;

    debug!(
        "region {name:?}: {} palette entries",
        block_state_palette.len()
    );
    Ok(Region {
        name: name.to_owned(),
        position: region.required_vec3("Position")?,
        size: region.required_vec3("Size")?,
        block_state_palette,
    })
}
