//! Image-as-matrix pipeline
//!
//! Decodes an uploaded image into an RGB matrix, derives the grayscale base
//! matrix, and recomputes every demonstrated transform together with the
//! 5×5 window the user is inspecting.

pub mod common;
pub mod matrix;
pub mod window;
pub mod transform;
pub mod decode;
pub mod export;
pub mod session;

pub use common::{
    MatrixError,
    Result,
};

pub use matrix::{
    Channels,
    DiffMatrix,
    Grid,
    ImageShape,
    Matrix,
    derive_grayscale,
    difference,
};

pub use window::{
    EditedWindow,
    WINDOW_SIZE,
    WindowBounds,
    WindowSelector,
    WindowTable,
    extract_window,
};

pub use transform::{
    BrightnessRange,
    Controls,
    InversionMode,
    Operation,
    TransformConfig,
    TransformConfigBuilder,
    apply_operation,
    brightness,
    edit_merge,
    invert,
    invert_blended,
    threshold,
};

pub use decode::{
    ImageCrateDecoder,
    ImageDecoder,
};

pub use export::{
    ExportConfig,
    MatrixWriter,
    TiffCompression,
    TiffMatrixWriter,
};

pub use session::{
    Frame,
    Panel,
    PanelData,
    PanelKind,
    Session,
};
