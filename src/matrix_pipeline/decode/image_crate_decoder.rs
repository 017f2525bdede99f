//! Decoder backed by the `image` crate.
//!
//! Any color type the codec produces is converted to 8-bit RGB; alpha is
//! discarded, matching how uploads are presented as a plain RGB matrix.

use tracing::debug;

use crate::matrix_pipeline::common::error::{MatrixError, Result};
use crate::matrix_pipeline::decode::decoder::ImageDecoder;
use crate::matrix_pipeline::matrix::{Channels, Matrix};

/// Decodes JPEG and PNG uploads.
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    /// # Returns
    ///
    /// * `Ok(Matrix)` - RGB matrix with the image's height and width
    /// * `Err(MatrixError::EmptyInput)` - `data` is empty
    /// * `Err(MatrixError::DecodeError)` - unknown format or corrupt data
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pixmatrix::matrix_pipeline::{ImageCrateDecoder, ImageDecoder};
    ///
    /// let bytes = std::fs::read("photo.png").unwrap();
    /// let rgb = ImageCrateDecoder.decode(&bytes).unwrap();
    /// println!("{}", rgb.shape());
    /// ```
    fn decode(&self, data: &[u8]) -> Result<Matrix> {
        if data.is_empty() {
            return Err(MatrixError::EmptyInput);
        }

        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| MatrixError::DecodeError(e.to_string()))?;

        debug!("Decoded color type: {:?}", decoded.color());

        let rgb = decoded.into_rgb8();
        let (width, height) = rgb.dimensions();

        debug!("Decoded image: {}x{}", width, height);

        Matrix::from_raw(height as usize, width as usize, Channels::Rgb, rgb.into_raw())
    }
}
