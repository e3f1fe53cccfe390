//! High-level square operations.
//!
//! These functions combine calculations with backend execution: identify the
//! source, plan the geometry, then hand the parameters to the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{calculate_crop_region, calculate_expand_canvas};
use super::params::{Background, CropParams, ExpandParams, Quality};
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Settings shared by both square operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareSettings {
    pub size: u32,
    pub quality: Quality,
    pub background: Background,
}

impl Default for SquareSettings {
    fn default() -> Self {
        Self {
            size: crate::config::DEFAULT_SIZE,
            quality: Quality::default(),
            background: Background::default(),
        }
    }
}

/// Plan a centered crop of a `dims` source into `output`.
pub(crate) fn plan_crop(
    source: &Path,
    output: &Path,
    dims: (u32, u32),
    settings: &SquareSettings,
) -> CropParams {
    CropParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        region: calculate_crop_region(dims),
        size: settings.size,
        quality: settings.quality,
        background: settings.background,
    }
}

/// Plan a centered expansion of a `dims` source into `output`.
pub(crate) fn plan_expand(
    source: &Path,
    output: &Path,
    dims: (u32, u32),
    settings: &SquareSettings,
) -> ExpandParams {
    ExpandParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        canvas: calculate_expand_canvas(dims),
        size: settings.size,
        quality: settings.quality,
        background: settings.background,
    }
}

fn check_dims(source: &Path, dims: (u32, u32)) -> Result<()> {
    if dims.0 == 0 || dims.1 == 0 {
        return Err(BackendError::InvalidGeometry(format!(
            "{} has no pixels ({}x{})",
            source.display(),
            dims.0,
            dims.1
        )));
    }
    Ok(())
}

/// Crop `source` to its centered square and write it to `output`.
///
/// Returns the written path.
pub fn crop_to_square(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    settings: &SquareSettings,
) -> Result<PathBuf> {
    let dims = get_dimensions(backend, source)?;
    check_dims(source, dims)?;
    let params = plan_crop(source, output, dims, settings);
    backend.crop_square(&params)?;
    Ok(params.output)
}

/// Pad `source` to a centered square canvas and write it to `output`.
///
/// Returns the written path.
pub fn expand_to_square(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    settings: &SquareSettings,
) -> Result<PathBuf> {
    let dims = get_dimensions(backend, source)?;
    check_dims(source, dims)?;
    let params = plan_expand(source, output, dims, settings);
    backend.expand_square(&params)?;
    Ok(params.output)
}
