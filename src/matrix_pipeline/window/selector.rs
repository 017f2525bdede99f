use tracing::debug;

use crate::matrix_pipeline::common::error::{MatrixError, Result};
use crate::matrix_pipeline::matrix::{Grid, ImageShape};

/// Side length of the inspected window.
pub const WINDOW_SIZE: usize = 5;

/// Top-left corner of the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowSelector {
    pub start_row: usize,
    pub start_col: usize,
}

impl WindowSelector {
    pub fn new(start_row: usize, start_col: usize) -> Self {
        Self { start_row, start_col }
    }
}

/// Largest valid start offsets for a given matrix shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub max_row: usize,
    pub max_col: usize,
}

impl WindowBounds {
    /// Fails with `ImageTooSmall` when either dimension is below the window size,
    /// since no offset range exists in that case.
    pub fn for_shape(shape: ImageShape) -> Result<Self> {
        if shape.height < WINDOW_SIZE || shape.width < WINDOW_SIZE {
            return Err(MatrixError::ImageTooSmall {
                height: shape.height,
                width: shape.width,
                window: WINDOW_SIZE,
            });
        }
        Ok(Self {
            max_row: shape.height - WINDOW_SIZE,
            max_col: shape.width - WINDOW_SIZE,
        })
    }

    pub fn contains(&self, selector: WindowSelector) -> bool {
        selector.start_row <= self.max_row && selector.start_col <= self.max_col
    }

    /// Saturates a requested offset into range, the way a bounded number input does.
    pub fn clamp(&self, selector: WindowSelector) -> WindowSelector {
        WindowSelector {
            start_row: selector.start_row.min(self.max_row),
            start_col: selector.start_col.min(self.max_col),
        }
    }
}

/// Copies the `WINDOW_SIZE`×`WINDOW_SIZE` block at `selector`, all channels.
///
/// An offset past the valid range is reported as `WindowOutOfBounds` rather
/// than truncated.
pub fn extract_window<T: Copy>(grid: &Grid<T>, selector: WindowSelector) -> Result<Grid<T>> {
    let bounds = WindowBounds::for_shape(grid.shape())?;
    if !bounds.contains(selector) {
        return Err(MatrixError::WindowOutOfBounds {
            row: selector.start_row,
            col: selector.start_col,
            max_row: bounds.max_row,
            max_col: bounds.max_col,
        });
    }

    debug!(row = selector.start_row, col = selector.start_col, "Extracting window");

    let n = grid.channels().count();
    let mut data = Vec::with_capacity(WINDOW_SIZE * WINDOW_SIZE * n);
    for row in selector.start_row..selector.start_row + WINDOW_SIZE {
        let start = selector.start_col * n;
        data.extend_from_slice(&grid.row(row)[start..start + WINDOW_SIZE * n]);
    }

    Grid::from_raw(WINDOW_SIZE, WINDOW_SIZE, grid.channels(), data)
}
