//! PDF processing layer
//!
//! Wraps PDFium behind the four operations the pipeline needs: open a
//! document, count pages, extract per-page text lines with geometry,
//! and rasterize a page at a scale factor.

mod reader;

pub use reader::{
    create_pdfium, extract_page_lines, load_document, read_pdf_bytes, render_page, TextLine,
};
