use thiserror::Error;

pub mod commands {
    pub mod generate;
    pub mod preview;
}

pub mod stylesheets;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error("{0}")]
    Palette(#[from] color_ladder::Error),
}
