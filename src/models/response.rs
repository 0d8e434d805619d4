use serde::{Deserialize, Serialize};

use crate::models::analysis::{AnalysisResult, SchemaIssues};

/// Successful analysis: `{"result": {...}}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub result: AnalysisResult,
}

/// Error payload shared by every failing status code.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    /// Model output that failed to parse, returned unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<SchemaIssues>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw: None,
            issues: None,
        }
    }
}

/// Liveness payload: `{"status": "ok"}`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}
