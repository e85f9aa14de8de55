//! Cotejar: pairwise image acceptance validation.
//!
//! Compares a candidate image against a reference image and produces a
//! pass/fail verdict from two scalar metrics:
//!
//! - **MPD** — the maximum per-pixel channel-averaged absolute difference.
//! - **RMSE** — the root mean square of those per-pixel difference values.
//!
//! Both metrics are checked against fixed acceptance thresholds
//! (MPD < 150, RMSE < 10, both strict); a comparison is acceptable only
//! when both hold. The intended consumer is a test harness validating that
//! a rendered or generated image matches a reference within tolerance.
//!
//! ```
//! use cotejar::Comparator;
//! use image::{Rgb, RgbImage};
//!
//! let reference = RgbImage::from_pixel(2, 2, Rgb([255, 0, 0]));
//! let candidate = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
//!
//! let verdict = Comparator::default().compare(&reference, &candidate).unwrap();
//! assert!((verdict.mpd - 85.0).abs() < f64::EPSILON);
//! assert!(verdict.mpd_ok);
//! assert!(!verdict.rmse_ok);
//! assert!(!verdict.is_acceptable);
//! ```
//!
//! File-based harnesses can use [`compare_files`], which decodes both
//! inputs and resamples the candidate when the dimensions disagree.

#![warn(missing_docs)]

mod compare;
mod decode;
mod report;
mod resample;
mod result;

pub use compare::{compare_files, Comparator, Thresholds, Verdict};
pub use decode::load_rgb;
pub use report::{render_json, render_text};
pub use resample::to_dimensions;
pub use result::{CotejarError, CotejarResult};
