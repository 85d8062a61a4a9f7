//! Crop boundary calculation
//!
//! Converts the positioned matches of one page into ordered,
//! non-overlapping crop rectangles. Each mark allocation closes a
//! question part; the part opens either at the nearest header above it
//! (a new question) or where the previous part on the page ended (a
//! continuation). Question-number and sub-label counters live in a
//! [`LabelState`] value that the caller threads through successive
//! pages, so the calculation itself stays a pure per-page function.

use crate::detect::matcher::{HeaderMatch, PageMatches};

/// Regions shorter than this are treated as false positives, e.g. a
/// mark pattern quoted inside running text.
pub const MIN_REGION_HEIGHT: f32 = 40.0;

/// Fixed right edge as a fraction of the page width. Exam papers keep
/// a margin column on the right (mark grid, binding edge) that the
/// crops must not include.
pub const RIGHT_FRACTION: f32 = 0.85;

/// Vertical slack below a mark allocation's line, so the crop does not
/// clip descenders on the closing line.
pub const MARK_BUFFER: f32 = 10.0;

/// A rectangle on one page designated for image export, in top-down
/// page points, plus the label it will be filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct CropRegion {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub question: u32,
    pub sub_label: String,
    pub page: u32,
}

/// Labeling state carried across pages for the duration of one run.
///
/// `question` is `None` until the first header of the document has
/// been seen; `next_sub` indexes the sub-label the next emitted region
/// will receive (0 = 'a').
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelState {
    pub question: Option<u32>,
    pub next_sub: u32,
}

/// Format a zero-based sub-label index as an alphabetic label.
///
/// Runs 'a'..'z', then continues spreadsheet-style with double letters
/// ('aa', 'ab', ...). Questions with more than 26 parts are rare but
/// the labels stay unique.
pub fn sub_label(index: u32) -> String {
    let mut label = String::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        label.insert(0, (b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    label
}

/// Compute the crop regions for one page.
///
/// Takes the label state as carried forward from the preceding pages
/// and returns the updated state alongside the regions, ordered top to
/// bottom. A page with no mark matches yields no regions; that is the
/// expected outcome for cover and instruction pages.
pub fn compute_regions(
    matches: &PageMatches,
    page_width: f32,
    state: LabelState,
) -> (LabelState, Vec<CropRegion>) {
    let mut state = state;
    let right = page_width * RIGHT_FRACTION;
    let mut regions = Vec::new();

    // End of the previous part on this page; the first part without a
    // header starts at the page top.
    let mut prev_end = 0.0_f32;
    let mut header_idx = 0;

    for mark in &matches.marks {
        // Consume headers at or above this mark, keeping the closest
        // usable one. Question numbers observed in document order never
        // decrease, so a lower number is a phantom match in body text.
        let mut header: Option<&HeaderMatch> = None;
        while header_idx < matches.headers.len() && matches.headers[header_idx].y <= mark.y {
            let candidate = &matches.headers[header_idx];
            header_idx += 1;
            if state.question.is_some_and(|q| candidate.number < q) {
                tracing::debug!(
                    number = candidate.number,
                    y = candidate.y,
                    "ignoring out-of-sequence header"
                );
                continue;
            }
            header = Some(candidate);
        }

        let top = match header {
            Some(h) => h.y,
            None => prev_end,
        };

        // A header advances the question counter even if its region is
        // discarded below, so later parts stay attached to the right
        // question number.
        if let Some(h) = header {
            state.question = Some(h.number);
            state.next_sub = 0;
        }

        let bottom = mark.y + MARK_BUFFER;

        if bottom - top < MIN_REGION_HEIGHT {
            tracing::debug!(
                page = mark.page,
                top,
                bottom,
                "discarding region below minimum height"
            );
            continue;
        }

        let Some(question) = state.question else {
            // A mark before the first header of the document has no
            // owning question to file it under.
            tracing::debug!(page = mark.page, y = mark.y, "mark precedes any question header");
            continue;
        };

        regions.push(CropRegion {
            left: 0.0,
            top,
            right,
            bottom,
            question,
            sub_label: sub_label(state.next_sub),
            page: mark.page,
        });
        state.next_sub += 1;
        prev_end = bottom;
    }

    (state, regions)
}
