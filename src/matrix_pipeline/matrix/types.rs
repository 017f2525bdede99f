//! Matrix data types

use std::fmt;

use crate::matrix_pipeline::common::error::{MatrixError, Result};

/// Number of interleaved channels per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// Single intensity channel
    Gray,
    /// Red, green, blue (channel-last)
    Rgb,
}

impl Channels {
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }
}

/// Height, width and channel count of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageShape {
    pub height: usize,
    pub width: usize,
    pub channels: Channels,
}

impl fmt::Display for ImageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.channels {
            Channels::Gray => write!(f, "({}, {})", self.height, self.width),
            Channels::Rgb => write!(f, "({}, {}, 3)", self.height, self.width),
        }
    }
}

/// Row-major, channel-last pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    channels: Channels,
    data: Vec<T>,
}

/// Unsigned 8-bit matrix; every element is a valid pixel intensity.
pub type Matrix = Grid<u8>;

/// Signed matrix used for the difference view.
pub type DiffMatrix = Grid<i16>;

impl<T: Copy> Grid<T> {
    /// Wraps `data`, validating that it holds exactly `height * width * channels` values.
    pub fn from_raw(height: usize, width: usize, channels: Channels, data: Vec<T>) -> Result<Self> {
        if height == 0 || width == 0 || data.len() != height * width * channels.count() {
            return Err(MatrixError::InvalidDimensions {
                height,
                width,
                channels: channels.count(),
                len: data.len(),
            });
        }
        Ok(Self { height, width, channels, data })
    }

    /// Builds a grid whose length is already known to match `shape`.
    pub(crate) fn from_shape(shape: ImageShape, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), shape.height * shape.width * shape.channels.count());
        Self {
            height: shape.height,
            width: shape.width,
            channels: shape.channels,
            data,
        }
    }

    #[cfg(test)]
    pub(crate) fn filled(height: usize, width: usize, channels: Channels, value: T) -> Self {
        Self {
            height,
            width,
            channels,
            data: vec![value; height * width * channels.count()],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn shape(&self) -> ImageShape {
        ImageShape {
            height: self.height,
            width: self.width,
            channels: self.channels,
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.width + col) * self.channels.count()
    }

    /// Value of one channel; panics when the coordinate is outside the matrix.
    #[inline]
    pub fn get(&self, row: usize, col: usize, channel: usize) -> T {
        self.data[self.offset(row, col) + channel]
    }

    /// All channels of the pixel at `(row, col)`.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> &[T] {
        let start = self.offset(row, col);
        &self.data[start..start + self.channels.count()]
    }

    #[inline]
    pub fn pixel_mut(&mut self, row: usize, col: usize) -> &mut [T] {
        let start = self.offset(row, col);
        let n = self.channels.count();
        &mut self.data[start..start + n]
    }

    /// Contiguous slice of row `row`, all channels.
    pub fn row(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.width * self.channels.count()]
    }

    /// Pointwise map that keeps the shape.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: Fn(T) -> U,
    {
        Grid {
            height: self.height,
            width: self.width,
            channels: self.channels,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}
