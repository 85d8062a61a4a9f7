//! Question detection
//!
//! Two stages: `matcher` turns page text lines into positioned header
//! and mark matches, `boundary` turns those matches into labeled crop
//! rectangles.

mod boundary;
mod matcher;

pub use boundary::{compute_regions, sub_label, CropRegion, LabelState, MARK_BUFFER,
    MIN_REGION_HEIGHT, RIGHT_FRACTION};
pub use matcher::{scan_page, HeaderMatch, MarkMatch, PageMatches};
