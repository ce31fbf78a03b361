#![warn(clippy::pedantic)]

pub mod config;
pub mod driver;
pub mod error;
pub mod render_json;
pub mod render_text;
pub mod render_tree;

mod style;

pub use config::{OutputMode, RenderConfig};
pub use driver::{DefaultDriver, SchematicDriver};
pub use error::DriverError;
pub use render_json::JsonRenderer;
pub use render_text::TextRenderer;
pub use render_tree::TreeRenderer;
