use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::matrix_pipeline::common::error::{MatrixError, Result};
use crate::matrix_pipeline::export::{ExportConfig, MatrixWriter};
use crate::matrix_pipeline::matrix::{DiffMatrix, ImageShape, Matrix};
use crate::matrix_pipeline::transform::{Controls, InversionMode};
use crate::matrix_pipeline::window::{WINDOW_SIZE, WindowSelector, WindowTable, extract_window};

/// Which view a panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Original,
    Grayscale,
    Brightness,
    Inversion,
    Threshold,
    Operation,
    Edited,
    Difference,
}

impl PanelKind {
    pub fn label(self) -> &'static str {
        match self {
            PanelKind::Original => "Original image",
            PanelKind::Grayscale => "Grayscale matrix",
            PanelKind::Brightness => "Brightness (matrix addition)",
            PanelKind::Inversion => "Inversion",
            PanelKind::Threshold => "Threshold",
            PanelKind::Operation => "Selected operation",
            PanelKind::Edited => "Edited matrix",
            PanelKind::Difference => "Difference (edited - grayscale)",
        }
    }

    pub fn file_stem(self) -> &'static str {
        match self {
            PanelKind::Original => "original",
            PanelKind::Grayscale => "grayscale",
            PanelKind::Brightness => "brightness",
            PanelKind::Inversion => "inversion",
            PanelKind::Threshold => "threshold",
            PanelKind::Operation => "operation",
            PanelKind::Edited => "edited",
            PanelKind::Difference => "difference",
        }
    }
}

#[derive(Debug, Clone)]
pub enum PanelData {
    Unsigned { full: Matrix, window: Matrix },
    /// Difference view; never clamped back to [0, 255].
    Signed { full: DiffMatrix, window: DiffMatrix },
}

/// A derived matrix together with the same window sliced out of it.
#[derive(Debug, Clone)]
pub struct Panel {
    pub kind: PanelKind,
    pub data: PanelData,
}

impl Panel {
    pub(crate) fn unsigned(kind: PanelKind, full: Matrix, selector: WindowSelector) -> Result<Self> {
        let window = extract_window(&full, selector)?;
        Ok(Self {
            kind,
            data: PanelData::Unsigned { full, window },
        })
    }

    pub(crate) fn signed(kind: PanelKind, full: DiffMatrix, selector: WindowSelector) -> Result<Self> {
        let window = extract_window(&full, selector)?;
        Ok(Self {
            kind,
            data: PanelData::Signed { full, window },
        })
    }

    pub fn shape(&self) -> ImageShape {
        match &self.data {
            PanelData::Unsigned { full, .. } => full.shape(),
            PanelData::Signed { full, .. } => full.shape(),
        }
    }

    pub fn unsigned_full(&self) -> Option<&Matrix> {
        match &self.data {
            PanelData::Unsigned { full, .. } => Some(full),
            PanelData::Signed { .. } => None,
        }
    }

    pub fn unsigned_window(&self) -> Option<&Matrix> {
        match &self.data {
            PanelData::Unsigned { window, .. } => Some(window),
            PanelData::Signed { .. } => None,
        }
    }

    pub fn signed_full(&self) -> Option<&DiffMatrix> {
        match &self.data {
            PanelData::Signed { full, .. } => Some(full),
            PanelData::Unsigned { .. } => None,
        }
    }

    pub fn signed_window(&self) -> Option<&DiffMatrix> {
        match &self.data {
            PanelData::Signed { window, .. } => Some(window),
            PanelData::Unsigned { .. } => None,
        }
    }
}

/// Everything the presentation layer shows for one set of control values.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Shape of the uploaded image
    pub shape: ImageShape,
    pub selector: WindowSelector,
    /// Control values after clamping
    pub controls: Controls,
    pub inversion: InversionMode,
    pub panels: Vec<Panel>,
}

impl Frame {
    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    /// Writes one TIFF per panel into `dir`, creating it if needed.
    #[instrument(skip(self, dir, writer, config), fields(dir = %dir.as_ref().display()))]
    pub fn export<P: AsRef<Path>, W: MatrixWriter>(
        &self,
        dir: P,
        writer: &W,
        config: &ExportConfig,
    ) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .map_err(|e| MatrixError::OutputWriteError(format!("{}: {}", dir.display(), e)))?;

        let mut written = Vec::new();
        for panel in &self.panels {
            let _span = tracing::info_span!("export_panel", panel = panel.kind.file_stem()).entered();

            let path = dir.join(format!("{}.tiff", panel.kind.file_stem()));
            let window_path = dir.join(format!("{}_window.tiff", panel.kind.file_stem()));

            match &panel.data {
                PanelData::Unsigned { full, window } => {
                    write_with(&path, |out| writer.write_matrix(full, out, config))?;
                    if config.include_windows {
                        write_with(&window_path, |out| writer.write_matrix(window, out, config))?;
                    }
                }
                PanelData::Signed { full, window } => {
                    write_with(&path, |out| writer.write_diff(full, out, config))?;
                    if config.include_windows {
                        write_with(&window_path, |out| writer.write_diff(window, out, config))?;
                    }
                }
            }

            written.push(path);
            if config.include_windows {
                written.push(window_path);
            }
        }

        info!(files = written.len(), "Export complete");
        Ok(written)
    }
}

fn write_with<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    debug!(path = %path.display(), "Writing panel");
    let mut file = File::create(path)
        .map_err(|e| MatrixError::OutputWriteError(format!("{}: {}", path.display(), e)))?;
    write(&mut file)
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image shape: {}", self.shape)?;
        writeln!(
            f,
            "Window: rows {}-{}, cols {}-{}",
            self.selector.start_row,
            self.selector.start_row + WINDOW_SIZE - 1,
            self.selector.start_col,
            self.selector.start_col + WINDOW_SIZE - 1,
        )?;

        for panel in &self.panels {
            writeln!(f)?;
            match panel.kind {
                PanelKind::Brightness => writeln!(f, "{} [{:+}]", panel.kind.label(), self.controls.brightness)?,
                PanelKind::Inversion => match self.inversion {
                    InversionMode::Fixed => writeln!(f, "{} [255 - v]", panel.kind.label())?,
                    InversionMode::Blended => {
                        writeln!(f, "{} [{}%]", panel.kind.label(), self.controls.inversion_strength)?
                    }
                },
                PanelKind::Threshold => writeln!(f, "{} [> {}]", panel.kind.label(), self.controls.threshold)?,
                PanelKind::Operation => writeln!(f, "{} [{}]", panel.kind.label(), self.controls.operation)?,
                _ => writeln!(f, "{}", panel.kind.label())?,
            }
            match &panel.data {
                PanelData::Unsigned { window, .. } => write!(f, "{}", WindowTable::new(window, self.selector))?,
                PanelData::Signed { window, .. } => write!(f, "{}", WindowTable::new(window, self.selector))?,
            }
        }
        Ok(())
    }
}
