//! Image processing built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions` (header only) |
//! | **Crop** | centered `crop_imm` + Lanczos3 resize |
//! | **Expand** | filled canvas + `overlay` + Nearest resize |
//! | **Encode** | `JpegEncoder`, quality 90 |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for square geometry (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{
    ExpandCanvas, SquareRegion, calculate_crop_region, calculate_expand_canvas,
};
pub use operations::{SquareSettings, crop_to_square, expand_to_square, get_dimensions};
pub use params::{Background, CropParams, ExpandParams, Quality};
pub use rust_backend::{RustBackend, supported_input_extensions};
