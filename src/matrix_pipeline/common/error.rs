use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Input is empty")]
    EmptyInput,

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Invalid matrix dimensions: height={height}, width={width}, channels={channels}, data length={len}")]
    InvalidDimensions {
        height: usize,
        width: usize,
        channels: usize,
        len: usize,
    },

    #[error("Image too small for a {window}x{window} window: height={height}, width={width}")]
    ImageTooSmall {
        height: usize,
        width: usize,
        window: usize,
    },

    #[error("Window at (row={row}, col={col}) exceeds matrix bounds (max row={max_row}, max col={max_col})")]
    WindowOutOfBounds {
        row: usize,
        col: usize,
        max_row: usize,
        max_col: usize,
    },

    #[error("Shape mismatch: {left} vs {right}")]
    ShapeMismatch { left: String, right: String },

    #[error("Invalid edited window: {0}")]
    InvalidEdit(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("No image loaded")]
    NoImage,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
