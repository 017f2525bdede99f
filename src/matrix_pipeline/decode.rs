//! Image decoding module
//!
//! Turns uploaded file bytes into an RGB 8-bit matrix.

mod decoder;
mod image_crate_decoder;

pub use decoder::ImageDecoder;
pub use image_crate_decoder::ImageCrateDecoder;
