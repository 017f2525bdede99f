use std::io::Write;
use crate::matrix_pipeline::common::error::Result;
use crate::matrix_pipeline::export::types::ExportConfig;
use crate::matrix_pipeline::matrix::{DiffMatrix, Matrix};

pub trait MatrixWriter {
    fn write_matrix(&self, matrix: &Matrix, output: &mut dyn Write, config: &ExportConfig) -> Result<()>;
    /// Signed matrices must keep their sign on disk.
    fn write_diff(&self, matrix: &DiffMatrix, output: &mut dyn Write, config: &ExportConfig) -> Result<()>;
}
