use thiserror::Error;

pub mod base;
pub mod chromatic;
pub mod color;
pub mod grayscale;
pub mod source;
pub mod table;

pub use color::{HslColor, RgbColor};
pub use source::BaseColorSpec;
pub use table::{build_palette, PaletteEntry, PaletteTable};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Malformed source record on line {line}: {reason}")]
    MalformedSourceRecord { line: usize, reason: String },
    #[error("Channel value {value} on line {line} is outside 0-255")]
    OutOfRangeChannel { line: usize, value: i64 },
    #[error("Duplicate color name `{0}` in palette table")]
    DuplicateColorName(String),
}
