//! Matrix module
//!
//! Dense pixel matrices and the derivations taken from a decoded image.

pub mod types;
mod derive;

#[cfg(test)]
mod tests;

pub use types::{Channels, DiffMatrix, Grid, ImageShape, Matrix};
pub use derive::{derive_grayscale, difference};
