#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/appraisal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod export;
pub mod report;
pub mod summary;

pub use error::{ReportError, Result};
pub use export::{ExportFormat, Exporter};
pub use report::{ReportFormat, ValuationReport};
pub use summary::{CURRENCY, commentary, comparison_message, format_amount};
