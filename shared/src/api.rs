use chrono::DateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// Workflow API Types
// ============================================================================

/// One execution of the calendar synchronization workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRun {
    pub id: u64,
    #[serde(default)]
    pub run_number: u64,
    pub status: String,
    pub conclusion: Option<String>,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub html_url: String,
}

impl WorkflowRun {
    /// Keyword for the status badge. A completed run whose conclusion is a
    /// failure is shown as `failed`.
    pub fn badge_keyword(&self) -> &str {
        match (self.status.as_str(), self.conclusion.as_deref()) {
            ("completed", Some("failure" | "timed_out" | "startup_failure")) => "failed",
            (status, _) => status,
        }
    }

    /// Seconds between creation and last update, if both timestamps parse.
    pub fn elapsed_seconds(&self) -> Option<f64> {
        let created = DateTime::parse_from_rfc3339(&self.created_at).ok()?;
        let updated = DateTime::parse_from_rfc3339(&self.updated_at).ok()?;
        let millis = (updated - created).num_milliseconds();
        Some(millis as f64 / 1000.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStatusResponse {
    pub status: String,
    pub message: Option<String>,
    pub run: Option<WorkflowRun>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowHistoryResponse {
    pub status: String,
    pub total_count: u64,
    #[serde(default)]
    pub runs: Vec<WorkflowRun>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerWorkflowResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    #[serde(default)]
    pub github_configured: bool,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: Option<u16>,
}
