use std::fmt;

use crate::matrix_pipeline::matrix::{Channels, Grid};
use crate::matrix_pipeline::window::selector::WindowSelector;

/// Renders a window as a numeric table labelled with absolute image coordinates.
pub struct WindowTable<'a, T> {
    window: &'a Grid<T>,
    origin: WindowSelector,
}

impl<'a, T> WindowTable<'a, T> {
    pub fn new(window: &'a Grid<T>, origin: WindowSelector) -> Self {
        Self { window, origin }
    }
}

impl<T: Copy + fmt::Display> WindowTable<'_, T> {
    fn cell(&self, row: usize, col: usize) -> String {
        match self.window.channels() {
            Channels::Gray => self.window.get(row, col, 0).to_string(),
            Channels::Rgb => self
                .window
                .pixel(row, col)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}

impl<T: Copy + fmt::Display> fmt::Display for WindowTable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.window.height();
        let cols = self.window.width();

        let cells: Vec<Vec<String>> = (0..rows)
            .map(|r| (0..cols).map(|c| self.cell(r, c)).collect())
            .collect();

        let last_row = self.origin.start_row + rows.saturating_sub(1);
        let last_col = self.origin.start_col + cols.saturating_sub(1);
        let label_width = last_row.to_string().len();
        let cell_width = cells
            .iter()
            .flatten()
            .map(String::len)
            .chain(std::iter::once(last_col.to_string().len()))
            .max()
            .unwrap_or(1);

        write!(f, "{:>label_width$}", "")?;
        for c in 0..cols {
            write!(f, " {:>cell_width$}", self.origin.start_col + c)?;
        }
        writeln!(f)?;

        for (r, row) in cells.iter().enumerate() {
            write!(f, "{:>label_width$}", self.origin.start_row + r)?;
            for cell in row {
                write!(f, " {cell:>cell_width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
