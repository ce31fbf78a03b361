#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod mutf8;

pub use cursor::ByteCursor;
pub use error::WireError;
pub use mutf8::DecodedText;
