//! Viewer for pre-generated test-suite execution reports.
//!
//! A line-delimited JSON index lists suite summaries; each summary's full
//! detail is a separate JSON document fetched on demand. [`ReportViewModel`]
//! holds the summaries with filter and sort toggles and keeps the derived
//! visible list current.
//!
//! [`ReportViewModel`]: viewer::view_model::ReportViewModel

pub mod cli;
pub mod error;
pub mod report;
pub mod source;
pub mod suite;
pub mod summary;
pub mod viewer;
