//! Run configuration.
//!
//! Everything a run needs is carried in one [`SquareConfig`] value: the
//! directory to search, where to write, the mode and target size. Nothing is
//! read from ambient process state once the config exists, so tests build one
//! directly against a temp directory.
//!
//! ## Defaults
//!
//! ```text
//! size        1000      # output edge length in pixels
//! mode        crop
//! file        (none)    # folder mode
//! quality     90        # JPEG
//! background  #ffffff   # expand padding, alpha fill
//! output_dir  = root
//! ```

use crate::imaging::{Background, Quality};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default output edge length in pixels.
pub const DEFAULT_SIZE: u32 = 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// How a rectangle becomes a square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SquareMode {
    /// Discard the longer-axis excess around the center.
    #[default]
    Crop,
    /// Pad the shorter axis with the background colour.
    Expand,
}

impl SquareMode {
    /// Tag used in output file names and log lines.
    pub fn tag(self) -> &'static str {
        match self {
            SquareMode::Crop => "crop",
            SquareMode::Expand => "expand",
        }
    }
}

impl std::fmt::Display for SquareMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Complete description of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareConfig {
    /// Directory searched in folder mode; relative `file` paths resolve here.
    pub root: PathBuf,
    /// Directory outputs are written into.
    pub output_dir: PathBuf,
    /// Output edge length in pixels.
    pub size: u32,
    pub mode: SquareMode,
    /// Process only this file instead of walking `root`.
    pub file: Option<PathBuf>,
    pub quality: Quality,
    pub background: Background,
}

impl SquareConfig {
    /// Defaults rooted at `root`, writing outputs into the same directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            output_dir: root.clone(),
            root,
            size: DEFAULT_SIZE,
            mode: SquareMode::default(),
            file: None,
            quality: Quality::default(),
            background: Background::default(),
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_mode(mut self, mode: SquareMode) -> Self {
        self.mode = mode;
        self
    }

    /// Single-file mode. An empty path keeps folder mode.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        self.file = (!file.as_os_str().is_empty()).then_some(file);
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// The single file to process, resolved against `root`.
    pub fn resolved_file(&self) -> Option<PathBuf> {
        self.file.as_deref().map(|f| resolve(&self.root, f))
    }

    /// Validate values before any file is touched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::Validation(
                "size must be at least 1 pixel".to_string(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output directory must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
