//! Whole-document processing
//!
//! Drives the run: open the document, walk the pages in order, hand
//! each page's text to detection, and export every resulting region as
//! a PNG. Strictly sequential; the label state is the only value
//! carried from one page to the next.

use crate::detect::{compute_regions, scan_page, CropRegion, LabelState};
use crate::error::Result;
use crate::menu::ExamMeta;
use crate::pdf::{create_pdfium, extract_page_lines, load_document, read_pdf_bytes, render_page};
use crate::snip::{crop_region, save_png, RENDER_SCALE};
use std::path::Path;

/// What a completed run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub pages: u32,
    pub images: u32,
}

/// Replace filesystem-unsafe characters in a filename component.
fn sanitize_component(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '<' | '>' | ':' | '"' | '|' | '?' | '*' | '\\' => '_',
            c => c,
        })
        .collect()
}

/// Filename for one exported region:
/// `{Publisher}_{Level}_{Subject}_{Year}_{Question}_{SubLabel}.png`.
///
/// Collisions overwrite silently; the label scheme makes them rare but
/// does not rule them out.
pub fn image_filename(prefix: &str, region: &CropRegion) -> String {
    format!(
        "{}_{}_{}.png",
        prefix,
        region.question,
        sanitize_component(&region.sub_label)
    )
}

/// Process one exam paper, writing one PNG per detected question part
/// into `{output_root}/{Publisher}_{Subject}_{Year}/`.
///
/// Fatal before any output: missing or invalid PDF. Fatal mid-run: any
/// filesystem write failure, so a completed run never leaves a
/// silently incomplete image set behind.
pub fn run<P: AsRef<Path>>(pdf_path: P, meta: &ExamMeta, output_root: &Path) -> Result<RunSummary> {
    let output_dir = output_root.join(meta.folder_name());
    std::fs::create_dir_all(&output_dir)?;
    tracing::info!(folder = %output_dir.display(), "processing, images will be saved here");

    let data = read_pdf_bytes(pdf_path)?;
    let pdfium = create_pdfium()?;
    let document = load_document(&pdfium, &data)?;

    let pages = document.pages();
    let page_count = pages.len();
    let prefix = meta.file_prefix();

    let mut state = LabelState::default();
    let mut images = 0u32;

    for index in 0..page_count {
        let page = pages.get(index).map_err(|e| crate::error::Error::Pdfium {
            reason: format!("Failed to get page {}: {}", index + 1, e),
        })?;

        let lines = extract_page_lines(&page)?;
        let matches = scan_page(&lines, index as u32);
        let (next_state, regions) = compute_regions(&matches, page.width().value, state);
        state = next_state;

        if regions.is_empty() {
            tracing::debug!(page = index, "no question parts detected");
            continue;
        }

        // One rasterization per page, shared by all its regions
        let page_image = render_page(&page, RENDER_SCALE)?;

        for region in &regions {
            let filename = image_filename(&prefix, region);
            let crop = crop_region(&page_image, region, RENDER_SCALE);
            save_png(&crop, &output_dir.join(&filename))?;
            images += 1;
            tracing::info!(page = region.page, file = %filename, "crop saved");
        }
    }

    tracing::info!(pages = page_count, images, "finished processing");

    Ok(RunSummary {
        pages: page_count as u32,
        images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn region(question: u32, sub_label: &str) -> CropRegion {
        CropRegion {
            left: 0.0,
            top: 100.0,
            right: 505.75,
            bottom: 150.0,
            question,
            sub_label: sub_label.to_string(),
            page: 0,
        }
    }

    #[test]
    fn test_image_filename() {
        assert_eq!(
            image_filename("Pearson_ALevel_Maths_2023", &region(3, "a")),
            "Pearson_ALevel_Maths_2023_3_a.png"
        );
    }

    #[test]
    fn test_image_filename_is_deterministic() {
        let r = region(12, "ab");
        assert_eq!(
            image_filename("AQA_GCSE_Physics_2021", &r),
            image_filename("AQA_GCSE_Physics_2021", &r)
        );
    }

    #[test]
    fn test_sanitize_component() {
        assert_eq!(sanitize_component("a/b:c"), "a_b_c");
        assert_eq!(sanitize_component("ab"), "ab");
    }
}
