//! Errors raised when combining or writing rendered frames.

use thiserror::Error;

/// Errors that can occur while averaging or encoding frames.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error")]
    Image(#[from] image::ImageError),

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("No frames to combine")]
    NoFrames,

    #[error("Frame size mismatch: expected {expected:?}, found {found:?}")]
    FrameSizeMismatch { expected: (u32, u32), found: (u32, u32) },
}

pub type OutputResult<T> = Result<T, OutputError>;
