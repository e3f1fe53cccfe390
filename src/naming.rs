//! Output filename convention.
//!
//! Every file `sqrl` writes is named `sqrl-<mode>-<basename>`, where
//! `<basename>` is the input's file name with its original extension kept:
//!
//! - `photo.jpg`, crop → `sqrl-crop-photo.jpg`
//! - `holiday/beach.png`, expand → `sqrl-expand-beach.png`
//!
//! The shared `sqrl-` prefix is also how discovery recognises earlier output
//! and skips it.

use crate::config::SquareMode;
use std::path::Path;

/// Prefix shared by every generated file.
pub const OUTPUT_PREFIX: &str = "sqrl-";

/// Build the output file name for `source` in the given mode.
///
/// Returns `None` when the path has no file name (e.g. `/` or `..`).
pub fn output_file_name(source: &Path, mode: SquareMode) -> Option<String> {
    let base = source.file_name()?.to_string_lossy();
    Some(format!("{OUTPUT_PREFIX}{}-{base}", mode.tag()))
}

/// Whether a file name looks like something this tool produced.
pub fn is_generated(file_name: &str) -> bool {
    file_name.starts_with(OUTPUT_PREFIX)
}
