pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::toml_config::TomlConfig;

pub use crate::core::{extractor::SheetReportSource, service::ReportService};
pub use crate::utils::error::{ReportError, Result};
