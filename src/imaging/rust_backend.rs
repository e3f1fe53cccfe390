//! Pure Rust imaging backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, GIF) | `image::ImageReader` with content sniffing |
//! | Identify | `image::ImageReader::into_dimensions` |
//! | Crop | `DynamicImage::crop_imm` |
//! | Expand | `RgbaImage::from_pixel` + `imageops::overlay` |
//! | Resample | `Lanczos3` (crop), `Nearest` (expand) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{ExpandCanvas, SquareRegion};
use super::params::{Background, CropParams, ExpandParams, Quality};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader, Rgba, RgbaImage};
use log::debug;
use std::io::BufWriter;
use std::path::Path;

/// Extensions picked up by folder discovery. Decoding itself sniffs content,
/// so a mislabelled file still decodes if its bytes are a known format.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Returns the set of image file extensions that discovery matches.
pub fn supported_input_extensions() -> &'static [&'static str] {
    SUPPORTED_EXTENSIONS
}

/// Backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn open_reader(path: &Path) -> Result<ImageReader<std::io::BufReader<std::fs::File>>, BackendError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

/// Load and decode an image from disk, inferring the format from its bytes.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_reader(path)?
        .decode()
        .map_err(|source| BackendError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Largest canvas, in bytes, a single file may allocate. Shared with the
/// decoder's own default so a thin strip cannot blow up into a huge square.
fn max_canvas_bytes() -> u64 {
    image::Limits::default().max_alloc.unwrap_or(u64::MAX)
}

/// Opaque `side × side` canvas filled with the background.
fn filled_canvas(side: u32, background: Background) -> Result<RgbaImage, BackendError> {
    let bytes = u64::from(side) * u64::from(side) * 4;
    if bytes > max_canvas_bytes() {
        return Err(BackendError::InvalidGeometry(format!(
            "{side}px square canvas needs {bytes} bytes, over the {} byte limit",
            max_canvas_bytes()
        )));
    }
    let [r, g, b] = background.rgb();
    Ok(RgbaImage::from_pixel(side, side, Rgba([r, g, b, 255])))
}

/// Cut the centered square out of `img`, flatten it over the background and
/// resample it to `size × size`.
fn crop_square_image(
    img: &DynamicImage,
    region: SquareRegion,
    size: u32,
    background: Background,
) -> Result<DynamicImage, BackendError> {
    let (w, h) = img.dimensions();
    if size == 0 || region.side == 0 {
        return Err(BackendError::InvalidGeometry(format!(
            "cannot square {w}x{h} into {size}px"
        )));
    }
    if region.x + region.side > w || region.y + region.side > h {
        return Err(BackendError::InvalidGeometry(format!(
            "crop {}px at ({}, {}) exceeds {w}x{h}",
            region.side, region.x, region.y
        )));
    }

    let square = img.crop_imm(region.x, region.y, region.side, region.side);
    let mut flat = filled_canvas(region.side, background)?;
    image::imageops::overlay(&mut flat, &square.to_rgba8(), 0, 0);
    let resized = image::imageops::resize(&flat, size, size, FilterType::Lanczos3);
    Ok(DynamicImage::ImageRgba8(resized))
}

/// Build the opaque `side × side` canvas with `img` pasted at the offsets.
///
/// Translucent source pixels are blended over the background, so the result
/// never carries transparency into the JPEG.
fn build_canvas(
    img: &DynamicImage,
    canvas: ExpandCanvas,
    background: Background,
) -> Result<RgbaImage, BackendError> {
    let (w, h) = img.dimensions();
    if canvas.side == 0
        || canvas.offset_x + w > canvas.side
        || canvas.offset_y + h > canvas.side
    {
        return Err(BackendError::InvalidGeometry(format!(
            "{w}x{h} does not fit a {}px canvas at ({}, {})",
            canvas.side, canvas.offset_x, canvas.offset_y
        )));
    }

    let mut out = filled_canvas(canvas.side, background)?;
    image::imageops::overlay(
        &mut out,
        &img.to_rgba8(),
        i64::from(canvas.offset_x),
        i64::from(canvas.offset_y),
    );
    Ok(out)
}

/// Pad `img` to a square canvas and resample it to `size × size`.
fn expand_square_image(
    img: &DynamicImage,
    canvas: ExpandCanvas,
    size: u32,
    background: Background,
) -> Result<DynamicImage, BackendError> {
    if size == 0 {
        return Err(BackendError::InvalidGeometry(
            "target size must be positive".to_string(),
        ));
    }
    let filled = build_canvas(img, canvas, background)?;
    let resized = image::imageops::resize(&filled, size, size, FilterType::Nearest);
    Ok(DynamicImage::ImageRgba8(resized))
}

/// Encode as baseline JPEG at the given quality. Callers flatten alpha first.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality.value());
    DynamicImage::ImageRgb8(img.to_rgb8())
        .write_with_encoder(encoder)
        .map_err(|source| BackendError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?.into_dimensions().map_err(|source| {
            BackendError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Dimensions { width, height })
    }

    fn crop_square(&self, params: &CropParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        debug!(
            "crop {} at ({}, {}) side {}",
            params.source.display(),
            params.region.x,
            params.region.y,
            params.region.side
        );
        let squared = crop_square_image(&img, params.region, params.size, params.background)?;
        save_jpeg(&squared, &params.output, params.quality)
    }

    fn expand_square(&self, params: &ExpandParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        debug!(
            "expand {} onto {}px canvas at ({}, {})",
            params.source.display(),
            params.canvas.side,
            params.canvas.offset_x,
            params.canvas.offset_y
        );
        let squared = expand_square_image(&img, params.canvas, params.size, params.background)?;
        save_jpeg(&squared, &params.output, params.quality)
    }
}
