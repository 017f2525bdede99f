//! Export configuration types

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression at the balanced level
    Deflate,
}

/// Configuration for writing panels to disk
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Compression method to use
    pub compression: TiffCompression,
    /// Whether each panel's 5×5 window is written next to the full matrix
    pub include_windows: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::None,
            include_windows: false,
        }
    }
}

impl ExportConfig {
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

/// Builder for ExportConfig
#[derive(Default)]
pub struct ExportConfigBuilder {
    compression: Option<TiffCompression>,
    include_windows: Option<bool>,
}

impl ExportConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn include_windows(mut self, enable: bool) -> Self {
        self.include_windows = Some(enable);
        self
    }

    pub fn build(self) -> ExportConfig {
        let default = ExportConfig::default();
        ExportConfig {
            compression: self.compression.unwrap_or(default.compression),
            include_windows: self.include_windows.unwrap_or(default.include_windows),
        }
    }
}
