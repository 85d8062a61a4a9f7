//! PDF reader wrapper for PDFium
//!
//! Text extraction here differs from a plain `page.text()` dump: the
//! boundary calculation downstream needs to reason geometrically, so
//! each extracted line carries its vertical extent in top-down page
//! points (y grows toward the bottom edge, like the crop rectangles).

use crate::error::{Error, Result};
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;

/// One line of page text with its vertical extent.
///
/// Coordinates are top-down page points: `top` is the distance from
/// the top edge of the page to the highest character of the line,
/// `bottom` to the lowest.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub top: f32,
    pub bottom: f32,
}

// Grouping tolerances, in page points. Characters within Y_TOLERANCE
// of the current line's baseline belong to the same line; horizontal
// gaps wider than SPACE_THRESHOLD become a space.
const Y_TOLERANCE: f32 = 5.0;
const SPACE_THRESHOLD: f32 = 10.0;

/// Get PDFium instance (creates new instance each time - PDFium is not thread-safe)
pub fn create_pdfium() -> Result<Pdfium> {
    // Try to bind to system library or use static linking
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

/// Read a PDF file into memory, validating existence and the `%PDF` header.
pub fn read_pdf_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::PdfNotFound {
            path: path.display().to_string(),
        });
    }

    let data = std::fs::read(path)?;

    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }

    Ok(data)
}

/// Load a PDF document from bytes already validated by [`read_pdf_bytes`].
pub fn load_document<'a>(pdfium: &'a Pdfium, data: &'a [u8]) -> Result<PdfDocument<'a>> {
    pdfium
        .load_pdf_from_byte_slice(data, None)
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to load document: {}", e),
        })
}

/// Extract the text of one page as positioned lines, top to bottom.
///
/// A page without extractable text yields an empty vector, not an
/// error; scanned-image-only pages are an expected input.
pub fn extract_page_lines(page: &PdfPage) -> Result<Vec<TextLine>> {
    let text_obj = match page.text() {
        Ok(t) => t,
        Err(_) => return Ok(Vec::new()),
    };

    let page_height = page.height().value;

    // Collect characters as (char, x, top, bottom) in top-down coordinates.
    // PDFium reports bounds with the origin at the bottom-left corner,
    // so the page height flips the axis.
    let mut chars: Vec<(char, f32, f32, f32)> = Vec::new();

    for segment in text_obj.segments().iter() {
        if let Ok(char_iter) = segment.chars() {
            for char_result in char_iter.iter() {
                if let Some(c) = char_result.unicode_char() {
                    if let Ok(bounds) = char_result.loose_bounds() {
                        let x = bounds.left().value;
                        let top = page_height - bounds.top().value;
                        let bottom = page_height - bounds.bottom().value;
                        chars.push((c, x, top, bottom));
                    }
                }
            }
        }
    }

    if chars.is_empty() {
        return Ok(Vec::new());
    }

    // Sort top to bottom, then left to right
    chars.sort_by(|a, b| {
        let y_cmp = a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal);
        if y_cmp == std::cmp::Ordering::Equal {
            a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal)
        } else {
            y_cmp
        }
    });

    // Group into lines by Y proximity
    let mut groups: Vec<Vec<(char, f32, f32, f32)>> = Vec::new();
    let mut current: Vec<(char, f32, f32, f32)> = Vec::new();
    let mut current_y: Option<f32> = None;

    for ch in chars {
        match current_y {
            Some(cur_y) if (cur_y - ch.2).abs() <= Y_TOLERANCE => {
                current.push(ch);
            }
            _ => {
                if !current.is_empty() {
                    groups.push(std::mem::take(&mut current));
                }
                current_y = Some(ch.2);
                current.push(ch);
            }
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    let mut lines = Vec::with_capacity(groups.len());
    for mut group in groups {
        group.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let top = group
            .iter()
            .map(|c| c.2)
            .fold(f32::MAX, f32::min);
        let bottom = group
            .iter()
            .map(|c| c.3)
            .fold(f32::MIN, f32::max);

        // Rebuild the line text, inserting a space across wide gaps
        let mut text = String::new();
        let mut prev_x: Option<f32> = None;
        for (c, x, _, _) in group {
            if let Some(px) = prev_x {
                if x - px > SPACE_THRESHOLD && c != ' ' {
                    text.push(' ');
                }
            }
            text.push(c);
            prev_x = Some(x);
        }

        lines.push(TextLine { text, top, bottom });
    }

    Ok(lines)
}

/// Rasterize a whole page at the given scale factor.
pub fn render_page(page: &PdfPage, scale: f32) -> Result<DynamicImage> {
    let config = PdfRenderConfig::new().scale_page_by_factor(scale);

    let bitmap = page.render_with_config(&config).map_err(|e| Error::Pdfium {
        reason: format!("Failed to render page: {}", e),
    })?;

    Ok(bitmap.as_image())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_pdf_bytes_missing_file() {
        let result = read_pdf_bytes("/nonexistent/paper.pdf");
        assert!(matches!(result, Err(Error::PdfNotFound { .. })));
    }

    #[test]
    fn test_read_pdf_bytes_rejects_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();

        let result = read_pdf_bytes(&path);
        assert!(matches!(result, Err(Error::InvalidPdf { .. })));
    }
}
