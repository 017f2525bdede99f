//! Transform engine module
//!
//! Pointwise transforms over the base matrix and the edit-merge step, plus the
//! configuration and control values that drive them.

pub mod types;
mod engine;

#[cfg(test)]
mod tests;

pub use types::{BrightnessRange, Controls, InversionMode, Operation, TransformConfig, TransformConfigBuilder};
pub use engine::{apply_operation, brightness, edit_merge, invert, invert_blended, threshold};
