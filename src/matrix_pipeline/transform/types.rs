//! Transform configuration and control types

use std::fmt;
use std::str::FromStr;

use crate::matrix_pipeline::common::error::MatrixError;
use crate::matrix_pipeline::window::{EditedWindow, WindowSelector};

/// Declared range of the brightness slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessRange {
    /// Offsets in [-100, 100]
    Signed,
    /// Offsets in [0, 100]
    Positive,
}

impl BrightnessRange {
    pub fn bounds(self) -> (i32, i32) {
        match self {
            BrightnessRange::Signed => (-100, 100),
            BrightnessRange::Positive => (0, 100),
        }
    }
}

/// How the inversion panel is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InversionMode {
    /// `255 - v`, ignoring the strength control
    Fixed,
    /// Linear blend between identity and full inversion, weighted by strength
    Blended,
}

/// Operation selector applied to the RGB image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Brightness,
    Inversion,
    Grayscale,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Brightness => "Brightness",
            Operation::Inversion => "Inversion",
            Operation::Grayscale => "Grayscale",
        };
        f.write_str(name)
    }
}

impl FromStr for Operation {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brightness" => Ok(Operation::Brightness),
            "inversion" | "invert" => Ok(Operation::Inversion),
            "grayscale" | "greyscale" | "gray" => Ok(Operation::Grayscale),
            other => Err(MatrixError::UnknownOperation(other.to_string())),
        }
    }
}

/// Policy choices for the transform engine
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Range the brightness offset is clamped into
    pub brightness_range: BrightnessRange,
    /// Fixed subtraction or strength-weighted blend
    pub inversion: InversionMode,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            brightness_range: BrightnessRange::Signed,
            inversion: InversionMode::Blended,
        }
    }
}

impl TransformConfig {
    pub fn builder() -> TransformConfigBuilder {
        TransformConfigBuilder::default()
    }
}

/// Builder for TransformConfig
#[derive(Default)]
pub struct TransformConfigBuilder {
    brightness_range: Option<BrightnessRange>,
    inversion: Option<InversionMode>,
}

impl TransformConfigBuilder {
    pub fn brightness_range(mut self, range: BrightnessRange) -> Self {
        self.brightness_range = Some(range);
        self
    }

    pub fn inversion(mut self, mode: InversionMode) -> Self {
        self.inversion = Some(mode);
        self
    }

    pub fn build(self) -> TransformConfig {
        let default = TransformConfig::default();
        TransformConfig {
            brightness_range: self.brightness_range.unwrap_or(default.brightness_range),
            inversion: self.inversion.unwrap_or(default.inversion),
        }
    }
}

/// Current values of every user control
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub window: WindowSelector,
    /// Brightness offset added to every pixel
    pub brightness: i32,
    /// Inversion strength in percent
    pub inversion_strength: i32,
    /// Threshold level; pixels strictly above it become white
    pub threshold: i32,
    pub operation: Operation,
    /// Replacement values for the window, if the user edited it
    pub edits: Option<EditedWindow>,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            window: WindowSelector::default(),
            brightness: 0,
            inversion_strength: 100,
            threshold: 128,
            operation: Operation::Brightness,
            edits: None,
        }
    }
}

impl Controls {
    /// Saturates every scalar control into its declared range.
    /// The window offset is clamped separately once the image shape is known.
    pub fn clamped(&self, config: &TransformConfig) -> Self {
        let (lo, hi) = config.brightness_range.bounds();
        Self {
            brightness: self.brightness.clamp(lo, hi),
            inversion_strength: self.inversion_strength.clamp(0, 100),
            threshold: self.threshold.clamp(0, 255),
            ..self.clone()
        }
    }

    /// Blend weight in [0, 1]
    pub fn alpha(&self) -> f32 {
        self.inversion_strength.clamp(0, 100) as f32 / 100.0
    }
}
