use std::fmt;

use serde::Serialize;

/// Three scalar components, always named `x`, `y`, `z`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {}, Z: {}", self.x, self.y, self.z)
    }
}

/// One palette entry: a namespaced block id such as `minecraft:stone`.
///
/// The name is opaque at this layer. Block-state properties stored next
/// to it in the file are not carried over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlockState {
    pub name: String,
}

/// A named sub-volume of the schematic.
///
/// `size` components may be negative; the sign gives the direction from
/// `position` and is kept as stored. `block_state_palette` is in
/// declaration order, which other (unbound) fields index into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Region {
    pub name: String,
    pub position: Vec3<i32>,
    pub size: Vec3<i32>,
    pub block_state_palette: Vec<BlockState>,
}

/// Descriptive header of a schematic. Timestamps are epoch milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub enclosing_size: Vec3<i32>,
    pub author: String,
    pub description: String,
    pub name: String,
    pub region_count: i32,
    pub time_created: i64,
    pub time_modified: i64,
    pub total_blocks: i32,
    pub total_volume: i32,
}

/// A fully bound schematic file.
///
/// Regions are in the order they appear in the file; names are unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Schematic {
    pub metadata: Metadata,
    pub regions: Vec<Region>,
    pub version: i32,
    pub sub_version: i32,
    pub minecraft_data_version: i32,
}

impl Schematic {
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.name == name)
    }
}
