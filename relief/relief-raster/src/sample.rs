//! Luminance sampling from raster images.

use std::io::ErrorKind;
use std::path::Path;

use image::DynamicImage;
use relief_types::HeightGrid;

use crate::error::{RasterError, RasterResult};

/// Sample an image file into a height grid.
///
/// Any pixel format is reduced to a single 8-bit luminance channel; the
/// grid dimensions match the image's pixel dimensions exactly.
///
/// # Errors
///
/// Returns [`RasterError::FileNotFound`] when the path does not exist,
/// [`RasterError::Decode`] when the file is not a valid image, and
/// [`RasterError::Io`] for other read failures.
///
/// # Example
///
/// ```no_run
/// use relief_raster::sample_image;
///
/// let grid = sample_image("heightmap.png").unwrap();
/// assert!(grid.max_sample() >= grid.min_sample());
/// ```
pub fn sample_image<P: AsRef<Path>>(path: P) -> RasterResult<HeightGrid> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(io) if io.kind() == ErrorKind::NotFound => {
            RasterError::FileNotFound {
                path: path.to_path_buf(),
            }
        }
        image::ImageError::IoError(io) => RasterError::Io(io),
        other => RasterError::Decode {
            path: path.to_path_buf(),
            source: other,
        },
    })?;

    let gray = img.to_luma8();
    if gray.width() == 0 || gray.height() == 0 {
        return Err(RasterError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    Ok(grid_from_luma(gray))
}

/// Convert an already-decoded image into a height grid.
///
/// Useful for callers that hold the image in memory (e.g. an upload
/// handler) and want to skip the filesystem round trip.
///
/// # Panics
///
/// Panics if the image has a zero pixel dimension; decoded images from
/// [`sample_image`] are guarded before this call.
#[must_use]
pub fn grid_from_dynamic(img: &DynamicImage) -> HeightGrid {
    grid_from_luma(img.to_luma8())
}

#[allow(clippy::cast_possible_truncation)]
// Truncation: pixel dimensions are u32 and fit usize on supported targets
fn grid_from_luma(gray: image::GrayImage) -> HeightGrid {
    let (width, height) = gray.dimensions();
    HeightGrid::new(gray.into_raw(), width as usize, height as usize)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, RgbImage};
    use std::io::Write;

    #[test]
    fn samples_match_source_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.png");

        let img = GrayImage::from_fn(3, 2, |x, y| Luma([u8::try_from(y * 100 + x).unwrap()]));
        img.save(&path).unwrap();

        let grid = sample_image(&path).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.sample(0, 0), Some(0));
        assert_eq!(grid.sample(0, 2), Some(2));
        assert_eq!(grid.sample(1, 1), Some(101));
    }

    #[test]
    fn color_input_reduces_to_luminance() {
        let img = RgbImage::from_pixel(2, 2, image::Rgb([255, 0, 0]));
        let grid = grid_from_dynamic(&DynamicImage::ImageRgb8(img));

        // Pure red maps to the standard luma weight for the red channel.
        let value = grid.sample(0, 0).unwrap();
        assert!(value > 0 && value < 255, "unexpected luma {value}");
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let result = sample_image("no_such_image_7f3a.png");
        assert!(matches!(result, Err(RasterError::FileNotFound { path }) if path
            .to_string_lossy()
            .contains("no_such_image")));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"definitely not a PNG").unwrap();
        drop(file);

        let result = sample_image(&path);
        assert!(matches!(result, Err(RasterError::Decode { .. })));
    }
}
