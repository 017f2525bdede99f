use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::matrix_pipeline::{
    common::error::{MatrixError, Result},
    decode::{ImageCrateDecoder, ImageDecoder},
    matrix::{ImageShape, Matrix, derive_grayscale, difference},
    session::frame::{Frame, Panel, PanelKind},
    transform::{Controls, InversionMode, Operation, TransformConfig, apply_operation, brightness, edit_merge, invert, invert_blended, threshold},
    window::{EditedWindow, WindowBounds, WindowSelector, extract_window},
};

/// Decoded upload and its grayscale base matrix.
struct Source {
    rgb: Matrix,
    base: Matrix,
}

/// One user's interaction state: the last uploaded image and the current
/// control values. Every `render` recomputes all panels from scratch.
pub struct Session<D: ImageDecoder> {
    decoder: D,
    config: TransformConfig,
    controls: Controls,
    source: Option<Source>,
}

impl Session<ImageCrateDecoder> {
    pub fn new(config: TransformConfig) -> Self {
        Self::with_decoder(ImageCrateDecoder, config)
    }
}

impl<D: ImageDecoder> Session<D> {
    pub fn with_decoder(decoder: D, config: TransformConfig) -> Self {
        Self {
            decoder,
            config,
            controls: Controls::default(),
            source: None,
        }
    }

    /// Replaces the current image. The window returns to the top-left corner
    /// and any edits are discarded; scalar controls are kept.
    ///
    /// Images smaller than the window still load, but `render` refuses them.
    #[instrument(skip(self, data), fields(input_size = data.len()))]
    pub fn load(&mut self, data: &[u8]) -> Result<ImageShape> {
        let rgb = {
            let _span = tracing::info_span!("decode_image").entered();
            self.decoder.decode(data)?
        };

        let base = {
            let _span = tracing::info_span!("derive_grayscale").entered();
            derive_grayscale(&rgb)
        };

        let shape = rgb.shape();
        if let Err(e) = WindowBounds::for_shape(shape) {
            warn!("{}", e);
        }

        self.source = Some(Source { rgb, base });
        self.controls.window = WindowSelector::default();
        self.controls.edits = None;

        info!(shape = %shape, "Image loaded");
        Ok(shape)
    }

    #[instrument(skip(self, path))]
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ImageShape> {
        let path = path.as_ref();
        info!(input = %path.display(), "Loading image file");

        let data = std::fs::read(path)
            .map_err(|e| MatrixError::InputReadError(format!("{}: {}", path.display(), e)))?;

        self.load(&data)
    }

    pub fn shape(&self) -> Option<ImageShape> {
        self.source.as_ref().map(|s| s.rgb.shape())
    }

    pub fn window_bounds(&self) -> Result<WindowBounds> {
        let shape = self.shape().ok_or(MatrixError::NoImage)?;
        WindowBounds::for_shape(shape)
    }

    /// Moves the window, clamping the offset into range. Edits made at the
    /// previous position are dropped.
    pub fn set_window(&mut self, start_row: usize, start_col: usize) -> Result<WindowSelector> {
        let selector = self.window_bounds()?.clamp(WindowSelector::new(start_row, start_col));
        if selector != self.controls.window {
            self.controls.edits = None;
        }
        self.controls.window = selector;
        debug!(row = selector.start_row, col = selector.start_col, "Window moved");
        Ok(selector)
    }

    pub fn set_brightness(&mut self, offset: i32) -> i32 {
        let (lo, hi) = self.config.brightness_range.bounds();
        self.controls.brightness = offset.clamp(lo, hi);
        self.controls.brightness
    }

    pub fn set_inversion_strength(&mut self, percent: i32) -> i32 {
        self.controls.inversion_strength = percent.clamp(0, 100);
        self.controls.inversion_strength
    }

    pub fn set_threshold(&mut self, level: i32) -> i32 {
        self.controls.threshold = level.clamp(0, 255);
        self.controls.threshold
    }

    pub fn set_operation(&mut self, operation: Operation) {
        self.controls.operation = operation;
    }

    pub fn set_edits(&mut self, edits: EditedWindow) {
        self.controls.edits = Some(edits);
    }

    /// Edits a single cell of the window (window-relative coordinates).
    /// The first edit starts from the window's current grayscale values.
    pub fn set_cell(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        let mut edits = match self.controls.edits {
            Some(edits) => edits,
            None => self.current_window_values()?,
        };
        edits.set(row, col, value)?;
        self.controls.edits = Some(edits);
        Ok(())
    }

    fn current_window_values(&self) -> Result<EditedWindow> {
        let source = self.source.as_ref().ok_or(MatrixError::NoImage)?;
        let window = extract_window(&source.base, self.controls.window)?;
        EditedWindow::from_window(&window)
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Swaps the policy; controls are re-clamped against the new ranges.
    pub fn set_config(&mut self, config: TransformConfig) {
        self.controls = self.controls.clamped(&config);
        self.config = config;
    }

    /// Recomputes every panel for the current image and controls.
    #[instrument(skip(self))]
    pub fn render(&self) -> Result<Frame> {
        let source = self.source.as_ref().ok_or(MatrixError::NoImage)?;
        let shape = source.rgb.shape();
        WindowBounds::for_shape(shape)?;

        let controls = self.controls.clamped(&self.config);
        let selector = controls.window;
        let offset = controls.brightness;
        let alpha = controls.alpha();
        let base = &source.base;

        let mut panels = Vec::with_capacity(8);
        panels.push(Panel::unsigned(PanelKind::Original, source.rgb.clone(), selector)?);
        panels.push(Panel::unsigned(PanelKind::Grayscale, base.clone(), selector)?);

        {
            let _span = tracing::info_span!("pointwise_transforms").entered();
            panels.push(Panel::unsigned(PanelKind::Brightness, brightness(base, offset), selector)?);

            let inverted = match self.config.inversion {
                InversionMode::Fixed => invert(base),
                InversionMode::Blended => invert_blended(base, alpha),
            };
            panels.push(Panel::unsigned(PanelKind::Inversion, inverted, selector)?);

            let level = controls.threshold.clamp(0, 255) as u8;
            panels.push(Panel::unsigned(PanelKind::Threshold, threshold(base, level), selector)?);

            let operated = apply_operation(&source.rgb, controls.operation, offset, alpha);
            panels.push(Panel::unsigned(PanelKind::Operation, operated, selector)?);
        }

        {
            let _span = tracing::info_span!("edit_merge").entered();
            let edits = match controls.edits {
                Some(edits) => edits,
                None => EditedWindow::from_window(&extract_window(base, selector)?)?,
            };
            let edited = edit_merge(base, selector, &edits, offset)?;
            let diff = difference(&edited, base)?;
            panels.push(Panel::unsigned(PanelKind::Edited, edited, selector)?);
            panels.push(Panel::signed(PanelKind::Difference, diff, selector)?);
        }

        debug!(panels = panels.len(), "Render complete");

        Ok(Frame {
            shape,
            selector,
            controls,
            inversion: self.config.inversion,
            panels,
        })
    }
}
