//! Region cropping and PNG export
//!
//! The page is rasterized once at [`RENDER_SCALE`] and every region on
//! it is cut out of that bitmap. Regions arrive validated from the
//! boundary calculator; this module only maps page points to pixels,
//! clamps to the bitmap and writes the file.

use crate::detect::CropRegion;
use crate::error::{Error, Result};
use image::DynamicImage;
use std::path::Path;

/// Fixed upscaling factor over the PDF's native point resolution.
/// 1x rasterization of a typical A4 exam page is too coarse to read.
pub const RENDER_SCALE: f32 = 2.0;

/// Cut a region out of a rendered page bitmap.
///
/// `scale` must be the factor the bitmap was rendered at so page
/// points map onto pixels. Coordinates are clamped to the bitmap; a
/// region reaching past the page bottom simply ends at the last row.
pub fn crop_region(page_image: &DynamicImage, region: &CropRegion, scale: f32) -> DynamicImage {
    let (img_w, img_h) = (page_image.width(), page_image.height());

    let x = ((region.left * scale).max(0.0) as u32).min(img_w);
    let y = ((region.top * scale).max(0.0) as u32).min(img_h);
    let right = ((region.right * scale) as u32).min(img_w);
    let bottom = ((region.bottom * scale) as u32).min(img_h);

    page_image.crop_imm(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
}

/// Write an image as PNG. Overwrites silently if the path exists.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| Error::Render {
            reason: format!("Failed to write {}: {}", path.display(), e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn region(top: f32, bottom: f32, right: f32) -> CropRegion {
        CropRegion {
            left: 0.0,
            top,
            right,
            bottom,
            question: 1,
            sub_label: "a".to_string(),
            page: 0,
        }
    }

    fn blank_page(width: u32, height: u32) -> DynamicImage {
        DynamicImage::new_rgb8(width, height)
    }

    #[test]
    fn test_crop_maps_points_to_pixels() {
        // 595x842pt page rendered at 2x
        let page = blank_page(1190, 1684);
        let crop = crop_region(&page, &region(100.0, 150.0, 505.75), RENDER_SCALE);

        assert_eq!(crop.width(), 1011);
        assert_eq!(crop.height(), 100);
    }

    #[test]
    fn test_crop_clamps_to_page_bottom() {
        let page = blank_page(1190, 1684);
        // mark buffer pushed the region past the page edge
        let crop = crop_region(&page, &region(800.0, 850.0, 505.75), RENDER_SCALE);

        assert_eq!(crop.height(), 1684 - 1600);
    }

    #[test]
    fn test_save_png_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Pearson_ALevel_Maths_2023_1_a.png");

        save_png(&blank_page(20, 20), &path).unwrap();
        assert!(path.exists());

        // silent overwrite is the documented collision behavior
        save_png(&blank_page(10, 10), &path).unwrap();
        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.width(), 10);
    }
}
