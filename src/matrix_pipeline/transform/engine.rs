use tracing::debug;

use crate::matrix_pipeline::matrix::{Matrix, derive_grayscale};
use crate::matrix_pipeline::transform::types::Operation;
use crate::matrix_pipeline::window::{EditedWindow, WindowBounds, WindowSelector};
use crate::matrix_pipeline::common::error::{MatrixError, Result};

#[inline]
fn saturate(v: i32) -> u8 {
    v.clamp(0, u8::MAX as i32) as u8
}

/// `clamp(v + offset, 0, 255)` for every element.
pub fn brightness(base: &Matrix, offset: i32) -> Matrix {
    base.map(|v| saturate((v as i32).saturating_add(offset)))
}

/// `255 - v` for every element.
pub fn invert(base: &Matrix) -> Matrix {
    base.map(|v| u8::MAX - v)
}

/// `(1 - alpha) * v + alpha * (255 - v)`, rounded and clamped.
///
/// `alpha` outside [0, 1] is saturated first; 0 is the identity and 1 equals [`invert`].
pub fn invert_blended(base: &Matrix, alpha: f32) -> Matrix {
    let alpha = alpha.clamp(0.0, 1.0);
    base.map(|v| {
        let v = v as f32;
        let out = (1.0 - alpha) * v + alpha * (255.0 - v);
        out.round().clamp(0.0, 255.0) as u8
    })
}

/// 255 where `v > level`, otherwise 0. Values equal to the level map to 0.
pub fn threshold(base: &Matrix, level: u8) -> Matrix {
    base.map(|v| if v > level { u8::MAX } else { 0 })
}

/// Applies the selected operation to the RGB image.
///
/// Brightness uses `offset`, inversion blends with `alpha`, grayscale
/// ignores both.
pub fn apply_operation(rgb: &Matrix, operation: Operation, offset: i32, alpha: f32) -> Matrix {
    debug!(%operation, offset, alpha, "Applying operation");
    match operation {
        Operation::Brightness => brightness(rgb, offset),
        Operation::Inversion => invert_blended(rgb, alpha),
        Operation::Grayscale => derive_grayscale(rgb),
    }
}

/// Writes the edited window back into a copy of `base`, then adds
/// `global_offset` to the whole matrix.
///
/// Edits are clamped to [0, 255] before the offset is applied, and the
/// offset result is clamped again. Every channel of an edited pixel takes
/// the edited value.
pub fn edit_merge(
    base: &Matrix,
    selector: WindowSelector,
    edits: &EditedWindow,
    global_offset: i32,
) -> Result<Matrix> {
    let bounds = WindowBounds::for_shape(base.shape())?;
    if !bounds.contains(selector) {
        return Err(MatrixError::WindowOutOfBounds {
            row: selector.start_row,
            col: selector.start_col,
            max_row: bounds.max_row,
            max_col: bounds.max_col,
        });
    }

    let mut merged = base.clone();
    for (r, row) in edits.rows().iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            merged
                .pixel_mut(selector.start_row + r, selector.start_col + c)
                .fill(saturate(value));
        }
    }

    if global_offset == 0 {
        return Ok(merged);
    }
    Ok(brightness(&merged, global_offset))
}
