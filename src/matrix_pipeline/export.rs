//! Matrix export module
//!
//! Writes derived matrices and their windows as TIFF rasters.

mod writer;
mod tiff_matrix_writer;
pub mod types;

pub use writer::MatrixWriter;
pub use tiff_matrix_writer::TiffMatrixWriter;
pub use types::{ExportConfig, ExportConfigBuilder, TiffCompression};
