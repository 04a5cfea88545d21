use crate::core::{ReportSource, ReportsResponse};
use std::sync::Arc;

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch reports";

/// Boundary around a [`ReportSource`] that always yields a well-formed
/// response, whatever the upstream does.
#[derive(Clone)]
pub struct ReportService {
    source: Arc<dyn ReportSource>,
}

impl ReportService {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        Self { source }
    }

    pub fn from_source<S: ReportSource + 'static>(source: S) -> Self {
        Self::new(Arc::new(source))
    }

    pub fn source(&self) -> &Arc<dyn ReportSource> {
        &self.source
    }

    pub async fn serve_reports(&self) -> ReportsResponse {
        match self.source.fetch_reports().await {
            Ok(reports) => ReportsResponse::ok(reports),
            Err(e) => {
                tracing::error!(
                    "❌ Error fetching reports: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                ReportsResponse::failed(FETCH_ERROR_MESSAGE)
            }
        }
    }
}
