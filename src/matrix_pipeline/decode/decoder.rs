use crate::matrix_pipeline::common::error::Result;
use crate::matrix_pipeline::matrix::Matrix;

pub trait ImageDecoder {
    /// Decodes `data` into an RGB matrix of shape height × width × 3.
    fn decode(&self, data: &[u8]) -> Result<Matrix>;
}
