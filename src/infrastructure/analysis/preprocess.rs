//! Image preprocessing: decode, grayscale, resize, normalize

use std::path::Path;

use image::{DynamicImage, ImageReader, imageops::FilterType};
use thiserror::Error;

/// Errors raised while turning a file into model input
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("Failed to load image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Square grayscale tensor with values in `[0, 1]`, row-major
#[derive(Debug, Clone)]
pub struct PreprocessedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<f32>,
}

impl PreprocessedImage {
    pub fn mean(&self) -> f32 {
        if self.pixels.is_empty() {
            return 0.0;
        }

        self.pixels.iter().sum::<f32>() / self.pixels.len() as f32
    }
}

#[derive(Debug, Clone)]
pub struct ImagePreprocessor {
    input_size: u32,
}

impl ImagePreprocessor {
    pub fn new(input_size: u32) -> Self {
        Self { input_size }
    }

    /// Reads and preprocesses the image at `path`. The format is sniffed
    /// from the content, not the extension.
    pub fn preprocess_path(&self, path: &Path) -> Result<PreprocessedImage, PreprocessError> {
        let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        Ok(self.preprocess(&image))
    }

    pub fn preprocess(&self, image: &DynamicImage) -> PreprocessedImage {
        let gray = image.to_luma8();
        let resized = image::imageops::resize(
            &gray,
            self.input_size,
            self.input_size,
            FilterType::Triangle,
        );

        let pixels = resized
            .pixels()
            .map(|p| f32::from(p.0[0]) / 255.0)
            .collect();

        PreprocessedImage {
            width: resized.width(),
            height: resized.height(),
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn test_preprocess_resizes_to_input_size() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(40, 17, Luma([255])));
        let tensor = ImagePreprocessor::new(224).preprocess(&image);

        assert_eq!(tensor.width, 224);
        assert_eq!(tensor.height, 224);
        assert_eq!(tensor.pixels.len(), 224 * 224);
    }

    #[test]
    fn test_preprocess_normalizes_to_unit_range() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_fn(16, 16, |x, _| {
            Luma([(x * 16) as u8])
        }));
        let tensor = ImagePreprocessor::new(8).preprocess(&image);

        assert!(tensor.pixels.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_preprocess_converts_color_to_grayscale() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([255, 255, 255])));
        let tensor = ImagePreprocessor::new(4).preprocess(&image);

        assert!((tensor.mean() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_preprocess_path_reads_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scan.png");
        GrayImage::from_pixel(10, 10, Luma([51])).save(&path).unwrap();

        let tensor = ImagePreprocessor::new(5).preprocess_path(&path).unwrap();

        assert_eq!(tensor.pixels.len(), 25);
        assert!((tensor.mean() - 0.2).abs() < 1e-3);
    }

    #[test]
    fn test_preprocess_path_sniffs_format_despite_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scan.jpg");
        GrayImage::from_pixel(10, 10, Luma([0]))
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();

        assert!(ImagePreprocessor::new(5).preprocess_path(&path).is_ok());
    }

    #[test]
    fn test_preprocess_path_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scan.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = ImagePreprocessor::new(5).preprocess_path(&path).unwrap_err();
        assert!(matches!(err, PreprocessError::Decode(_)));
    }

    #[test]
    fn test_preprocess_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ImagePreprocessor::new(5)
            .preprocess_path(&dir.path().join("absent.png"))
            .unwrap_err();

        assert!(matches!(err, PreprocessError::Io(_)));
    }
}
