use tracing::debug;

use crate::matrix_pipeline::common::error::{MatrixError, Result};
use crate::matrix_pipeline::matrix::types::{Channels, DiffMatrix, Grid, ImageShape, Matrix};

/// Collapses an RGB matrix into the grayscale base matrix.
///
/// Each output value is the unweighted integer mean of the three channels,
/// truncated toward zero. A matrix that is already gray is returned as is.
pub fn derive_grayscale(rgb: &Matrix) -> Matrix {
    if rgb.channels() == Channels::Gray {
        return rgb.clone();
    }

    debug!("Deriving grayscale base matrix: {}x{}", rgb.width(), rgb.height());

    let data: Vec<u8> = rgb
        .data()
        .chunks_exact(3)
        .map(|px| ((px[0] as u16 + px[1] as u16 + px[2] as u16) / 3) as u8)
        .collect();

    Grid::from_shape(
        ImageShape {
            channels: Channels::Gray,
            ..rgb.shape()
        },
        data,
    )
}

/// Signed elementwise `modified - original`. The result is never clamped so
/// that darkened pixels stay negative.
pub fn difference(modified: &Matrix, original: &Matrix) -> Result<DiffMatrix> {
    if modified.shape() != original.shape() {
        return Err(MatrixError::ShapeMismatch {
            left: modified.shape().to_string(),
            right: original.shape().to_string(),
        });
    }

    let data: Vec<i16> = modified
        .data()
        .iter()
        .zip(original.data())
        .map(|(&m, &o)| m as i16 - o as i16)
        .collect();

    Ok(DiffMatrix::from_shape(modified.shape(), data))
}
