use serde::{Deserialize, Serialize};

/// Trimmed fields of one CSV line, in column order.
pub type RawRow = Vec<String>;

/// One normalized row of the report spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

/// Wire shape of the reports endpoint. `error` is only present on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub reports: Vec<ReportRecord>,
}

impl ReportsResponse {
    pub fn ok(reports: Vec<ReportRecord>) -> Self {
        Self {
            error: None,
            reports,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            reports: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn status_code(&self) -> u16 {
        if self.is_error() {
            500
        } else {
            200
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionReport {
    pub id: String,
    pub date: String,
    pub date_label: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub reports: Vec<InspectionReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLocation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub pdf_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub style_url: String,
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmsResponse {
    pub farms: Vec<Farm>,
    pub map: MapView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyResponse {
    pub general_document_url: String,
    pub locations: Vec<DocumentLocation>,
    pub map: MapView,
}
