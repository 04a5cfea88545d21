use crate::core::csv_line::parse_csv_line;
use crate::core::{ConfigProvider, ReportRecord, ReportSource};
use crate::utils::error::{ReportError, Result};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;

/// Shapes the CSV export body into report records.
///
/// The first line is the header. Blank lines are skipped and do not consume
/// an id, so ids follow the position among emitted records.
pub fn parse_reports(text: &str) -> Vec<ReportRecord> {
    text.split('\n')
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| {
            let mut values = parse_csv_line(line).into_iter();
            let location = values.next().unwrap_or_default();
            let description = values.next().unwrap_or_default();
            let date = values.next().unwrap_or_default();

            ReportRecord {
                id: format!("report-{}", index + 1),
                date,
                location,
                description,
            }
        })
        .collect()
}

/// Report source backed by a spreadsheet published as CSV.
#[derive(Debug, Clone)]
pub struct SheetReportSource {
    client: Client,
    url: String,
}

impl SheetReportSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: config.source_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Downloads the current CSV text, never a cached copy.
    pub async fn fetch_text(&self) -> Result<String> {
        tracing::debug!("Fetching report sheet from: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Report sheet response status: {}", status);

        if !status.is_success() {
            return Err(ReportError::UpstreamStatusError {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl ReportSource for SheetReportSource {
    async fn fetch_reports(&self) -> Result<Vec<ReportRecord>> {
        let text = self.fetch_text().await?;
        let reports = parse_reports(&text);
        tracing::info!("📄 Extracted {} reports from sheet", reports.len());
        Ok(reports)
    }
}
