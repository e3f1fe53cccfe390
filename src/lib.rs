//! # sqrl
//!
//! Expand or crop images into a square.
//!
//! Every image either loses the excess of its longer side (crop mode, the
//! default) or gains solid padding on its shorter side (expand mode), and is
//! then resampled to `size × size` and written as a quality-90 JPEG named
//! `sqrl-<mode>-<basename>`.
//!
//! # Pipeline
//!
//! ```text
//! 1. Discover   root/    →  image paths       (walkdir, sqrl-* skipped)
//! 2. Identify   path     →  (width, height)   (header only)
//! 3. Plan       dims     →  region / canvas   (pure geometry)
//! 4. Square     params   →  sqrl-<mode>-*     (decode, transform, resize, encode)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | [`SquareConfig`](config::SquareConfig): root, size, mode, single file, quality, background |
//! | [`scan`] | Recursive image discovery |
//! | [`naming`] | `sqrl-<mode>-<basename>` output convention |
//! | [`imaging`] | Geometry, backend trait, `image`-crate backend |
//! | [`process`] | Sequential batch driver with per-file failure isolation |
//! | [`output`] | Run summary formatting |
//!
//! # Design Decisions
//!
//! ## Per-file isolation
//!
//! A corrupt file is logged and listed in the report; the rest of the folder
//! is still processed. Only config and traversal problems stop a run.
//!
//! ## Whole-image paste
//!
//! Expand mode pastes every source pixel, edge rows and columns included,
//! onto the canvas. Translucent pixels are blended over the background.
//!
//! ## Suffix matching
//!
//! Discovery matches `jpg`, `jpeg`, `png` and `gif` as case-insensitive file
//! extensions and skips files whose *name* starts with `sqrl-`.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;
