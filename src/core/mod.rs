pub mod catalog;
pub mod csv_line;
pub mod date_format;
pub mod extractor;
pub mod service;

pub use crate::domain::model::{RawRow, ReportRecord, ReportsResponse};
pub use crate::domain::ports::{ConfigProvider, ReportSource};
pub use crate::utils::error::Result;
