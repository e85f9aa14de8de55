//! Pairwise image comparison against fixed acceptance thresholds.
//!
//! One forward pass over the pixels of two equal-sized RGB grids keeps two
//! scalar accumulators (running maximum and running sum of squares) and
//! derives both metrics from them at the end, so memory stays O(1) in image
//! size and no per-pixel collection is ever built.

use crate::decode;
use crate::resample;
use crate::result::{CotejarError, CotejarResult};
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Acceptance thresholds for a comparison
///
/// Both conditions are strict: a metric exactly equal to its threshold
/// fails. The defaults are the process-wide acceptance constants; nothing
/// on the CLI surface alters them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Maximum allowed per-pixel channel-averaged difference (exclusive)
    pub max_pixel_diff: f64,
    /// Maximum allowed root mean square error (exclusive)
    pub rmse: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_pixel_diff: 150.0,
            rmse: 10.0,
        }
    }
}

impl Thresholds {
    /// Set the maximum pixel difference threshold
    #[must_use]
    pub const fn with_max_pixel_diff(mut self, threshold: f64) -> Self {
        self.max_pixel_diff = threshold;
        self
    }

    /// Set the RMSE threshold
    #[must_use]
    pub const fn with_rmse(mut self, threshold: f64) -> Self {
        self.rmse = threshold;
        self
    }

    /// Evaluate both acceptance conditions for the given metrics
    #[must_use]
    pub fn evaluate(&self, mpd: f64, rmse: f64) -> Verdict {
        let mpd_ok = mpd < self.max_pixel_diff;
        let rmse_ok = rmse < self.rmse;
        Verdict {
            mpd,
            rmse,
            mpd_ok,
            rmse_ok,
            is_acceptable: mpd_ok && rmse_ok,
        }
    }
}

/// Result of comparing two images
///
/// Derived entirely from the scan accumulators; immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Maximum per-pixel channel-averaged difference over the whole image
    pub mpd: f64,
    /// Square root of the mean of squared per-pixel difference values
    ///
    /// The quantity being squared is the channel-averaged absolute
    /// difference, not a raw channel delta, so this is not the textbook
    /// per-channel RMSE.
    pub rmse: f64,
    /// Whether `mpd` is strictly below its threshold
    pub mpd_ok: bool,
    /// Whether `rmse` is strictly below its threshold
    pub rmse_ok: bool,
    /// Whether both conditions hold
    pub is_acceptable: bool,
}

impl Verdict {
    /// Check if the images were identical (both metrics exactly zero)
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.mpd == 0.0 && self.rmse == 0.0
    }
}

/// Pairwise image comparator
///
/// Closes over a [`Thresholds`] value and scans every pixel of two
/// equal-sized grids exactly once. Pure: no side effects, no state across
/// calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    thresholds: Thresholds,
}

impl Comparator {
    /// Create a comparator with the given thresholds
    #[must_use]
    pub const fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Get the thresholds this comparator evaluates against
    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Compare two equal-sized RGB grids
    ///
    /// Empty images (either dimension zero) are trivially acceptable with
    /// both metrics at zero. The comparator never resizes; callers must
    /// reconcile dimensions first (see [`compare_files`]), and unequal
    /// grids are rejected with [`CotejarError::DimensionMismatch`].
    ///
    /// # Errors
    ///
    /// Returns an error only when the grids differ in size.
    pub fn compare(&self, reference: &RgbImage, candidate: &RgbImage) -> CotejarResult<Verdict> {
        let (width, height) = reference.dimensions();
        let (cand_width, cand_height) = candidate.dimensions();
        if (width, height) != (cand_width, cand_height) {
            return Err(CotejarError::DimensionMismatch {
                ref_width: width,
                ref_height: height,
                cand_width,
                cand_height,
            });
        }

        let pixel_count = u64::from(width) * u64::from(height);
        if pixel_count == 0 {
            return Ok(self.thresholds.evaluate(0.0, 0.0));
        }

        let mut max_diff = 0.0_f64;
        let mut sum_sq = 0.0_f64;

        for (p1, p2) in reference.pixels().zip(candidate.pixels()) {
            let diff = pixel_diff(*p1, *p2);
            if diff > max_diff {
                max_diff = diff;
            }
            sum_sq += diff * diff;
        }

        let mpd = max_diff;
        let rmse = (sum_sq / pixel_count as f64).sqrt();
        tracing::debug!(mpd, rmse, pixel_count, "pixel scan complete");

        Ok(self.thresholds.evaluate(mpd, rmse))
    }
}

/// Per-pixel difference: absolute channel deltas averaged over RGB
///
/// Integer subtraction first, float division last; the quotient lands in
/// `[0.0, 255.0]`.
fn pixel_diff(a: Rgb<u8>, b: Rgb<u8>) -> f64 {
    let Rgb([r1, g1, b1]) = a;
    let Rgb([r2, g2, b2]) = b;

    let dr = (i32::from(r1) - i32::from(r2)).unsigned_abs();
    let dg = (i32::from(g1) - i32::from(g2)).unsigned_abs();
    let db = (i32::from(b1) - i32::from(b2)).unsigned_abs();

    f64::from(dr + dg + db) / 3.0
}

/// Decode, reconcile sizes, and compare two image files
///
/// The candidate is resampled to the reference's dimensions when the two
/// disagree; a warning naming both sizes is emitted on that path. This is
/// the one-call API for harnesses embedding the crate.
///
/// # Errors
///
/// Returns [`CotejarError::FileNotFound`] or [`CotejarError::Decode`] when
/// either input cannot be acquired; the comparison is aborted with no
/// partial result.
pub fn compare_files(
    reference: &Path,
    candidate: &Path,
    thresholds: Thresholds,
) -> CotejarResult<Verdict> {
    let reference_img = decode::load_rgb(reference)?;
    let mut candidate_img = decode::load_rgb(candidate)?;

    let (ref_width, ref_height) = reference_img.dimensions();
    let (cand_width, cand_height) = candidate_img.dimensions();
    if (cand_width, cand_height) != (ref_width, ref_height) {
        tracing::warn!(
            "image sizes differ; resampling '{}' from {cand_width}x{cand_height} to {ref_width}x{ref_height}",
            candidate.display()
        );
        candidate_img = resample::to_dimensions(&candidate_img, ref_width, ref_height);
    }

    Comparator::new(thresholds).compare(&reference_img, &candidate_img)
}
