//! Risk report generation.
//!
//! A report is deterministic content (title, date, prediction line,
//! probability line, five-row diet table, fixed disclaimer) rendered to PDF.

mod content;
mod pdf;

pub use content::{DISCLAIMER, REPORT_TITLE, ReportContent};
pub use pdf::{render_pdf, write_pdf};
