use thiserror::Error;

#[derive(Error, Debug)]
pub enum CuptrackError {
    #[error("Invalid frame dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid detector configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CuptrackError>;
