//! Image decoding and normalization into the classifier's input tensor.
//!
//! Input bytes may be any format the `image` crate was built with
//! (PNG/JPEG/BMP/GIF). Color images are reduced to 8-bit luminance before
//! resizing; the result is stretched to 128×128 without preserving the
//! aspect ratio.

use std::path::{Path, PathBuf};

use image::error::{DecodingError, ImageFormatHint};
use image::imageops::{self, FilterType};
use image::ImageError;
use ndarray::Array4;

use crate::error::PreprocessError;
use crate::tensor::{Tensor, INPUT_CHANNELS, INPUT_HEIGHT, INPUT_WIDTH};

/// Extensions accepted by the upload route. The check is case-sensitive.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// An uploaded image: declared filename plus raw bytes, and where the
/// upload was written to disk if it was.
#[derive(Debug, Clone)]
pub struct Image {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub stored_path: Option<PathBuf>,
}

impl Image {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Image {
        Image { filename: filename.into(), bytes, stored_path: None }
    }

    pub fn with_stored_path(mut self, path: impl Into<PathBuf>) -> Image {
        self.stored_path = Some(path.into());
        self
    }

    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.filename).extension().and_then(|e| e.to_str())
    }

    pub fn has_allowed_extension(&self) -> bool {
        has_allowed_extension(&self.filename)
    }
}

/// Case-sensitive suffix check against `ALLOWED_EXTENSIONS`.
pub fn has_allowed_extension(filename: &str) -> bool {
    ALLOWED_EXTENSIONS.iter().any(|ext| {
        filename
            .strip_suffix(ext)
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

/// An image with a zero dimension is rejected as a decode failure.
fn require_pixels(width: u32, height: u32) -> Result<(), PreprocessError> {
    if width == 0 || height == 0 {
        let reason = format!("image has no pixels ({}x{})", width, height);
        return Err(ImageError::Decoding(DecodingError::new(ImageFormatHint::Unknown, reason)).into());
    }
    Ok(())
}

/// Converts raster images into `Tensor`s of shape (1, 128, 128, 1).
#[derive(Debug, Clone, Copy)]
pub struct ImagePreprocessor {
    filter: FilterType,
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        ImagePreprocessor { filter: FilterType::CatmullRom }
    }
}

impl ImagePreprocessor {
    pub fn with_filter(filter: FilterType) -> Self {
        ImagePreprocessor { filter }
    }

    /// Decodes, converts to grayscale, resizes, and scales samples by 1/255.
    pub fn preprocess(&self, scan: &Image) -> Result<Tensor, PreprocessError> {
        let decoded = image::load_from_memory(&scan.bytes)?;
        require_pixels(decoded.width(), decoded.height())?;

        let gray = decoded.to_luma8();
        let resized = imageops::resize(&gray, INPUT_WIDTH as u32, INPUT_HEIGHT as u32, self.filter);

        let mut array = Array4::<f64>::zeros((1, INPUT_HEIGHT, INPUT_WIDTH, INPUT_CHANNELS));
        for (x, y, pixel) in resized.enumerate_pixels() {
            array[[0, y as usize, x as usize, 0]] = pixel.0[0] as f64 / 255.0;
        }

        Tensor::new(array)
    }
}
