//! Image discovery.
//!
//! Walks a directory tree and returns every image file worth squaring:
//!
//! ```text
//! work/                        # root
//! ├── input.jpg                # picked up
//! ├── logo.PNG                 # picked up (extensions are case-insensitive)
//! ├── sqrl-crop-input.jpg      # skipped: earlier output
//! ├── notes.txt                # skipped: not an image
//! ├── jpg-notes.txt            # skipped: extension must be a suffix
//! └── trips/
//!     └── beach.jpeg           # picked up (recursive)
//! ```
//!
//! Only regular files are returned. The list is sorted by path so that
//! repeated runs over the same tree visit files in the same order.

use crate::imaging::supported_input_extensions;
use crate::naming::is_generated;
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        source: walkdir::Error,
    },
}

/// Find every image under `root`, excluding files this tool generated.
pub fn find_images(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut images = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| ScanError::Walk {
            root: root.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if is_candidate(&entry) {
            images.push(entry.into_path());
        } else {
            debug!("skipping {}", entry.path().display());
        }
    }

    images.sort();
    Ok(images)
}

fn is_candidate(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    !is_generated(&name) && has_image_extension(entry.path())
}

fn has_image_extension(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    supported_input_extensions().contains(&ext.as_str())
}
