//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations every backend must
//! support: identify, crop_square and expand_square.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::params::{CropParams, ExpandParams};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions without decoding pixel data.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Cut `params.region` out of the source, resample, encode as JPEG.
    fn crop_square(&self, params: &CropParams) -> Result<(), BackendError>;

    /// Paste the source onto a filled canvas, resample, encode as JPEG.
    fn expand_square(&self, params: &ExpandParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::imaging::calculations::{ExpandCanvas, SquareRegion};
    use crate::imaging::params::{Background, Quality};
    use std::sync::Mutex;

    /// Mock backend that records operations without executing them.
    #[derive(Default)]
    pub struct MockBackend {
        pub identify_results: Mutex<Vec<Dimensions>>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Crop {
            source: String,
            output: String,
            region: SquareRegion,
            size: u32,
            quality: u8,
            background: [u8; 3],
        },
        Expand {
            source: String,
            output: String,
            canvas: ExpandCanvas,
            size: u32,
            quality: u8,
            background: [u8; 3],
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                identify_results: Mutex::new(dims),
                operations: Mutex::new(Vec::new()),
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));

            self.identify_results
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| BackendError::InvalidGeometry("No mock dimensions".to_string()))
        }

        fn crop_square(&self, params: &CropParams) -> Result<(), BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Crop {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                region: params.region,
                size: params.size,
                quality: params.quality.value(),
                background: params.background.rgb(),
            });
            Ok(())
        }

        fn expand_square(&self, params: &ExpandParams) -> Result<(), BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Expand {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                canvas: params.canvas,
                size: params.size,
                quality: params.quality.value(),
                background: params.background.rgb(),
            });
            Ok(())
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 600,
        }]);

        let result = backend.identify(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_identify_without_dimensions_errors() {
        let backend = MockBackend::new();
        assert!(backend.identify(Path::new("/missing.jpg")).is_err());
    }

    #[test]
    fn mock_records_expand() {
        let backend = MockBackend::new();

        backend
            .expand_square(&ExpandParams {
                source: "/source.png".into(),
                output: "/sqrl-expand-source.png".into(),
                canvas: ExpandCanvas {
                    side: 800,
                    offset_x: 0,
                    offset_y: 100,
                },
                size: 400,
                quality: Quality::default(),
                background: Background::WHITE,
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Expand {
                size: 400,
                quality: 90,
                background: [255, 255, 255],
                ..
            }
        ));
    }
}
