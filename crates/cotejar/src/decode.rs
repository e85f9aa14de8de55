//! Image acquisition: decode files into 8-bit RGB grids.

use crate::result::{CotejarError, CotejarResult};
use image::RgbImage;
use std::path::Path;

/// Load an image from disk and convert it to 8-bit RGB
///
/// Alpha, palette, and wider bit depths are collapsed to RGB, which is the
/// only representation the comparator reads.
///
/// # Errors
///
/// Missing paths are reported as [`CotejarError::FileNotFound`]; files that
/// exist but do not parse as an image become [`CotejarError::Decode`] with
/// the underlying decoder cause.
pub fn load_rgb(path: &Path) -> CotejarResult<RgbImage> {
    if !path.exists() {
        return Err(CotejarError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|e| CotejarError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(img.to_rgb8())
}
