#![warn(clippy::pedantic)]

pub mod compound;
pub mod schematic;
pub mod tag;
pub mod tag_type;
pub mod tree;

pub use compound::Compound;
pub use schematic::{BlockState, Metadata, Region, Schematic, Vec3};
pub use tag::{Tag, TagList};
pub use tag_type::TagType;
pub use tree::{TagTree, TreeStats};
