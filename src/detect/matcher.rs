//! Pattern matching over extracted page text
//!
//! Two cues identify question structure in an exam paper:
//!
//! - a question-number header like `3.` opening a line, and
//! - a mark allocation like `(5)` printed at the end of a gradable
//!   part.
//!
//! Both are plain regex matches against extracted text lines; no OCR,
//! no layout analysis. Each match carries the vertical position of its
//! line so the boundary calculator can work geometrically.

use crate::pdf::TextLine;
use regex::Regex;
use std::sync::LazyLock;

// A header is only trusted at the start of a line. The raw cue is
// "digits followed by a period", but mid-line that matches every
// decimal fraction and abbreviated sentence. The trailing
// whitespace-or-end requirement rejects "3.5" style numbers.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.(?:\s|$)").unwrap());

static MARK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((\d+)\)").unwrap());

/// A question-number header occurrence. `y` is the top edge of its line.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMatch {
    pub number: u32,
    pub y: f32,
    pub page: u32,
}

/// A mark-allocation occurrence. `y` is the bottom edge of its line.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkMatch {
    pub marks: u32,
    pub y: f32,
    pub page: u32,
}

/// All matches found on one page, each list ordered by `y` ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMatches {
    pub headers: Vec<HeaderMatch>,
    pub marks: Vec<MarkMatch>,
}

impl PageMatches {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.marks.is_empty()
    }
}

/// Scan one page's lines for header and mark matches.
///
/// At most one match of each kind is taken per line (the first
/// occurrence). Pages with no matches yield empty lists; that is the
/// normal case for cover pages and pure prose.
pub fn scan_page(lines: &[TextLine], page: u32) -> PageMatches {
    let mut matches = PageMatches::default();

    for line in lines {
        if let Some(caps) = HEADER_RE.captures(&line.text) {
            if let Ok(number) = caps[1].parse::<u32>() {
                matches.headers.push(HeaderMatch {
                    number,
                    y: line.top,
                    page,
                });
            }
        }

        if let Some(caps) = MARK_RE.captures(&line.text) {
            if let Ok(marks) = caps[1].parse::<u32>() {
                matches.marks.push(MarkMatch {
                    marks,
                    y: line.bottom,
                    page,
                });
            }
        }
    }

    // Extraction emits lines top to bottom, but keep the ordering
    // guarantee independent of the caller.
    matches
        .headers
        .sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));
    matches
        .marks
        .sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));

    matches
}
