use std::str::FromStr;

use crate::matrix_pipeline::common::error::{MatrixError, Result};
use crate::matrix_pipeline::matrix::{Matrix, derive_grayscale};
use crate::matrix_pipeline::window::selector::WINDOW_SIZE;

/// User-supplied replacement values for the window.
///
/// Values are kept as entered; clamping to [0, 255] happens on merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditedWindow {
    values: [[i32; WINDOW_SIZE]; WINDOW_SIZE],
}

impl EditedWindow {
    pub fn new(values: [[i32; WINDOW_SIZE]; WINDOW_SIZE]) -> Self {
        Self { values }
    }

    pub fn uniform(value: i32) -> Self {
        Self {
            values: [[value; WINDOW_SIZE]; WINDOW_SIZE],
        }
    }

    /// Seeds the editor with an extracted window's intensities.
    pub fn from_window(window: &Matrix) -> Result<Self> {
        if window.height() != WINDOW_SIZE || window.width() != WINDOW_SIZE {
            return Err(MatrixError::InvalidEdit(format!(
                "expected a {WINDOW_SIZE}x{WINDOW_SIZE} window, got {}x{}",
                window.height(),
                window.width()
            )));
        }
        let gray = derive_grayscale(window);
        let mut values = [[0i32; WINDOW_SIZE]; WINDOW_SIZE];
        for (r, row) in values.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = gray.get(r, c, 0) as i32;
            }
        }
        Ok(Self { values })
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrites one cell; coordinates are relative to the window.
    pub fn set(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        let cell = self
            .values
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or_else(|| MatrixError::InvalidEdit(format!("cell ({row}, {col}) is outside the window")))?;
        *cell = value;
        Ok(())
    }

    pub fn rows(&self) -> &[[i32; WINDOW_SIZE]; WINDOW_SIZE] {
        &self.values
    }
}

/// Parses five lines of five integers separated by whitespace or commas.
/// Blank lines and lines starting with `#` are ignored.
impl FromStr for EditedWindow {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();

        if lines.len() != WINDOW_SIZE {
            return Err(MatrixError::InvalidEdit(format!(
                "expected {WINDOW_SIZE} rows, found {}",
                lines.len()
            )));
        }

        let mut values = [[0i32; WINDOW_SIZE]; WINDOW_SIZE];
        for (r, line) in lines.iter().enumerate() {
            let cells: Vec<&str> = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .collect();
            if cells.len() != WINDOW_SIZE {
                return Err(MatrixError::InvalidEdit(format!(
                    "row {r}: expected {WINDOW_SIZE} values, found {}",
                    cells.len()
                )));
            }
            for (c, token) in cells.iter().enumerate() {
                values[r][c] = token.parse().map_err(|_| {
                    MatrixError::InvalidEdit(format!("row {r}, col {c}: '{token}' is not an integer"))
                })?;
            }
        }

        Ok(Self { values })
    }
}
