//! Parameter types for square operations.
//!
//! These structs describe *what* to do, not *how*. The
//! [`operations`](super::operations) module fills them in from the source
//! dimensions and the [`backend`](super::backend) does the pixel work, so a
//! mock backend can stand in during tests.
//!
//! ## Types
//!
//! - [`Quality`] — JPEG quality (1–100, default 90). Clamped on construction.
//! - [`Background`] — Opaque fill colour behind padding and alpha (default white).
//! - [`CropParams`] — Source, output, centered region, final size and fill.
//! - [`ExpandParams`] — Source, output, canvas placement, final size and fill.

use super::calculations::{ExpandCanvas, SquareRegion};
use std::path::PathBuf;

/// Quality setting for JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Solid RGB fill for expand padding and for flattening alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background(pub [u8; 3]);

impl Background {
    pub const WHITE: Self = Self([255, 255, 255]);

    pub fn rgb(self) -> [u8; 3] {
        self.0
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Parameters for a crop-to-square operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CropParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Centered square cut from the source.
    pub region: SquareRegion,
    /// Final edge length after resampling.
    pub size: u32,
    pub quality: Quality,
    /// Colour translucent pixels are flattened onto.
    pub background: Background,
}

/// Parameters for an expand-to-square operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub canvas: ExpandCanvas,
    pub size: u32,
    pub quality: Quality,
    pub background: Background,
}
