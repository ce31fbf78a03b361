#![warn(clippy::pedantic)]

pub mod binder;
pub mod error;
pub mod loader;
pub mod path;
pub mod view;
pub mod warning;

pub use binder::{Binding, SchemaBinder};
pub use error::{SchemaError, SchematicError};
pub use loader::{LoadedSchematic, load_schematic, load_schematic_with_config};
pub use path::FieldPath;
pub use view::CompoundView;
pub use warning::BindWarning;
