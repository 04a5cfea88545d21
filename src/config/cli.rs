use crate::config::{
    sheet_csv_url, DEFAULT_HOST, DEFAULT_MAP_STYLE_URL, DEFAULT_PORT, DEFAULT_SHEET_GID,
    DEFAULT_SHEET_ID,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "farm-monitor")]
#[command(about = "Serves farm monitoring reports for the map viewer")]
pub struct CliConfig {
    #[arg(long, env = "FARM_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "FARM_SHEET_ID", default_value = DEFAULT_SHEET_ID)]
    pub sheet_id: String,

    #[arg(long, env = "FARM_SHEET_GID", default_value = DEFAULT_SHEET_GID)]
    pub sheet_gid: String,

    /// Full CSV URL, overrides the sheet id/gid pair
    #[arg(long, env = "REPORTS_SOURCE_URL")]
    pub source_url: Option<String>,

    #[arg(long, env = "MAP_STYLE_URL", default_value = DEFAULT_MAP_STYLE_URL)]
    pub map_style_url: String,

    #[arg(long, help = "Timeout for the sheet request, client default when unset")]
    pub request_timeout_secs: Option<u64>,

    /// Path to a TOML configuration file, replaces the source/server flags
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn source_url(&self) -> String {
        match &self.source_url {
            Some(url) => url.clone(),
            None => sheet_csv_url(&self.sheet_id, &self.sheet_gid),
        }
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn map_style_url(&self) -> &str {
        &self.map_style_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        if self.source_url.is_none() {
            validate_non_empty_string("sheet_id", &self.sheet_id)?;
            validate_non_empty_string("sheet_gid", &self.sheet_gid)?;
        }
        validate_url("source_url", &self.source_url())?;
        validate_url("map_style_url", &self.map_style_url)?;
        if let Some(timeout) = self.request_timeout_secs {
            validate_range("request_timeout_secs", timeout, 1, 300)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_url_override() {
        let config = CliConfig::try_parse_from([
            "farm-monitor",
            "--source-url",
            "http://127.0.0.1:9000/reports.csv",
        ])
        .unwrap();
        assert_eq!(config.source_url(), "http://127.0.0.1:9000/reports.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sheet_url_from_id_and_gid() {
        let config = CliConfig::try_parse_from([
            "farm-monitor",
            "--sheet-id",
            "sheet123",
            "--sheet-gid",
            "7",
        ])
        .unwrap();
        assert_eq!(
            config.source_url(),
            "https://docs.google.com/spreadsheets/d/sheet123/export?format=csv&gid=7"
        );
    }

    #[test]
    fn test_server_defaults_match_shared_constants() {
        let config = CliConfig::try_parse_from([
            "farm-monitor",
            "--source-url",
            "http://127.0.0.1:9000/reports.csv",
        ])
        .unwrap();
        if std::env::var("FARM_HOST").is_err() {
            assert_eq!(config.host(), DEFAULT_HOST);
        }
        if std::env::var("PORT").is_err() {
            assert_eq!(config.port(), DEFAULT_PORT);
        }
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = CliConfig::try_parse_from([
            "farm-monitor",
            "--source-url",
            "http://127.0.0.1:9000/reports.csv",
            "--request-timeout-secs",
            "0",
        ])
        .unwrap();
        assert!(config.validate().is_err());
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(0)));
    }
}
