use serde::{Deserialize, Serialize};

/// Severity of a dashboard notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Auto-dismiss delay used when the caller does not pick one.
    pub fn default_delay_ms(self) -> i64 {
        match self {
            Self::Success | Self::Info => 3000,
            Self::Warning => 4000,
            Self::Error => 5000,
        }
    }

    /// Alert modifier class; errors use the `danger` palette.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Unrecognized keywords fall back to `Info`.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }
}

/// Workflow run states that have a dedicated badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    InProgress,
    Queued,
    Failed,
}

impl RunStatus {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "completed" => Some(Self::Completed),
            "in_progress" => Some(Self::InProgress),
            "queued" => Some(Self::Queued),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completo",
            Self::InProgress => "Em progresso",
            Self::Queued => "Na fila",
            Self::Failed => "Falhou",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Completed => "bg-success",
            Self::InProgress => "bg-warning",
            Self::Queued => "bg-info",
            Self::Failed => "bg-danger",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Completed => "✓",
            Self::InProgress => "⟳",
            Self::Queued => "⏱",
            Self::Failed => "✗",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        assert_eq!(Severity::Success.default_delay_ms(), 3000);
        assert_eq!(Severity::Info.default_delay_ms(), 3000);
        assert_eq!(Severity::Warning.default_delay_ms(), 4000);
        assert_eq!(Severity::Error.default_delay_ms(), 5000);
    }

    #[test]
    fn test_unknown_severity_is_info() {
        assert_eq!(Severity::from_keyword("error"), Severity::Error);
        assert_eq!(Severity::from_keyword(""), Severity::Info);
        assert_eq!(Severity::from_keyword("fatal"), Severity::Info);
    }

    #[test]
    fn test_run_status_keywords() {
        assert_eq!(RunStatus::from_keyword("in_progress"), Some(RunStatus::InProgress));
        assert_eq!(RunStatus::from_keyword("Completed"), None);
        assert_eq!(RunStatus::Completed.label(), "Completo");
    }
}
