//! Batch driver.
//!
//! Resolves the work list from a [`SquareConfig`] (one named file, or every
//! image discovery finds under the root) and squares each file in turn.
//!
//! ## Failure handling
//!
//! Problems with the run as a whole (invalid config, unreadable directory
//! tree) abort before any file is written and come back as [`ProcessError`].
//! Problems with a single file (missing, corrupt, unwritable output) are
//! logged, recorded in the [`ProcessReport`] and the batch moves on, so one
//! bad file does not cost the rest of the folder.
//!
//! Files are processed sequentially; each file's buffers are dropped before
//! the next one is decoded.

use crate::config::{ConfigError, SquareConfig, SquareMode};
use crate::imaging::{
    BackendError, ImageBackend, RustBackend, SquareSettings, crop_to_square, expand_to_square,
};
use crate::naming::output_file_name;
use crate::scan::{ScanError, find_images};
use log::{error, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Discovery failed: {0}")]
    Scan(#[from] ScanError),
}

/// Why a single file could not be squared.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("No file name in {0}")]
    NoFileName(PathBuf),
    #[error(transparent)]
    Imaging(#[from] BackendError),
}

/// A file that was written successfully.
#[derive(Debug)]
pub struct Squared {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// A file that could not be processed.
#[derive(Debug)]
pub struct Failed {
    pub source: PathBuf,
    pub error: FileError,
}

/// What a run did, in processing order.
#[derive(Debug)]
pub struct ProcessReport {
    pub mode: SquareMode,
    pub size: u32,
    pub squared: Vec<Squared>,
    pub failed: Vec<Failed>,
}

impl ProcessReport {
    fn new(config: &SquareConfig) -> Self {
        Self {
            mode: config.mode,
            size: config.size,
            squared: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.squared.len() + self.failed.len()
    }
}

/// Run with the production [`RustBackend`].
pub fn process(config: &SquareConfig) -> Result<ProcessReport, ProcessError> {
    process_with_backend(config, &RustBackend::new())
}

/// Run with any backend. Used directly by tests with a mock.
pub fn process_with_backend(
    config: &SquareConfig,
    backend: &impl ImageBackend,
) -> Result<ProcessReport, ProcessError> {
    config.validate()?;

    let sources = match config.resolved_file() {
        Some(file) => vec![file],
        None => find_images(&config.root)?,
    };
    info!(
        "{} {} file(s) to {}px",
        config.mode,
        sources.len(),
        config.size
    );

    let settings = SquareSettings {
        size: config.size,
        quality: config.quality,
        background: config.background,
    };

    let mut report = ProcessReport::new(config);
    for source in sources {
        match square_file(backend, &source, config, &settings) {
            Ok(output) => {
                info!("{} → {}", source.display(), output.display());
                report.squared.push(Squared { source, output });
            }
            Err(e) => {
                error!("{}: {}", source.display(), e);
                report.failed.push(Failed { source, error: e });
            }
        }
    }

    Ok(report)
}

fn square_file(
    backend: &impl ImageBackend,
    source: &Path,
    config: &SquareConfig,
    settings: &SquareSettings,
) -> Result<PathBuf, FileError> {
    let name = output_file_name(source, config.mode)
        .ok_or_else(|| FileError::NoFileName(source.to_path_buf()))?;
    let output = config.output_dir.join(name);

    let written = match config.mode {
        SquareMode::Crop => crop_to_square(backend, source, &output, settings)?,
        SquareMode::Expand => expand_to_square(backend, source, &output, settings)?,
    };
    Ok(written)
}
