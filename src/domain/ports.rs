use crate::domain::model::ReportRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    /// Fully resolved URL of the CSV export.
    fn source_url(&self) -> String;
    fn request_timeout(&self) -> Option<Duration>;
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn map_style_url(&self) -> &str;
}

#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch_reports(&self) -> Result<Vec<ReportRecord>>;
}
