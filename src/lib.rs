//! exam-snip library
//!
//! Locates question blocks inside exam-paper PDFs by textual pattern
//! cues and exports each as a cropped PNG:
//! - `detect`: regex matching and crop boundary calculation
//! - `pdf`: PDFium-backed text extraction and rasterization
//! - `snip`: region cropping and PNG export
//! - `pipeline`: the sequential per-page run
//! - `menu`: interactive metadata collection

pub mod detect;
pub mod error;
pub mod menu;
pub mod pdf;
pub mod pipeline;
pub mod snip;

pub use error::{Error, Result};
pub use menu::{ExamMeta, Prompt, StdinPrompt};
pub use pipeline::{run, RunSummary};
