use anyhow::{Context, Result};
use serde::Deserialize;

use shared::validation::{has_max_length, is_numeric, is_required};

use crate::api::{DEFAULT_HISTORY_LIMIT, DEFAULT_TIMEOUT_MS};
use crate::surface::Surface;

/// The API never returns more runs than this.
pub const MAX_HISTORY_LIMIT: u32 = 100;

/// Id of the element whose text holds the page's JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "calsync-config";

const DEFAULT_BASE_URL: &str = match option_env!("CALSYNC_API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u32,
    pub history_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).context("client configuration must be a JSON object")?;
        anyhow::ensure!(
            config.history_limit > 0,
            "history_limit must be greater than zero"
        );
        Ok(config)
    }

    /// Validate a history limit typed by the user.
    pub fn parse_history_limit(raw: &str) -> Result<u32, &'static str> {
        if !is_required(raw) {
            return Err("Indique o número de execuções");
        }
        if !is_numeric(raw) || !has_max_length(raw.trim(), 3) {
            return Err("O limite tem de ser um número");
        }
        match raw.trim().parse::<u32>() {
            Ok(limit) if (1..=MAX_HISTORY_LIMIT).contains(&limit) => Ok(limit),
            _ => Err("O limite tem de estar entre 1 e 100"),
        }
    }

    /// Read the configuration embedded in the page, falling back to defaults.
    pub fn from_page<S: Surface>(surface: &S) -> Self {
        let Some(el) = surface.element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        match Self::from_json(&surface.inner_html(&el)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring page configuration: {:#}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySurface;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.history_limit, 10);
        assert!(!config.base_url.is_empty());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{"base_url": "https://sync.example/api"}"#).unwrap();
        assert_eq!(config.base_url, "https://sync.example/api");
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(ClientConfig::from_json("42").is_err());
        assert!(ClientConfig::from_json("{").is_err());
        assert!(ClientConfig::from_json(r#"{"history_limit": 0}"#).is_err());
    }

    #[test]
    fn test_parse_history_limit() {
        assert_eq!(ClientConfig::parse_history_limit(" 25 "), Ok(25));
        assert_eq!(ClientConfig::parse_history_limit("100"), Ok(100));
        assert!(ClientConfig::parse_history_limit("").is_err());
        assert!(ClientConfig::parse_history_limit("abc").is_err());
        assert!(ClientConfig::parse_history_limit("1000").is_err());
        assert!(ClientConfig::parse_history_limit("0").is_err());
        assert!(ClientConfig::parse_history_limit("2.5").is_err());
    }

    #[test]
    fn test_from_page() {
        let page = MemorySurface::new();
        assert_eq!(ClientConfig::from_page(&page), ClientConfig::default());

        let script = page.add("script", CONFIG_ELEMENT_ID);
        page.set_inner_html(&script, r#"{"history_limit": 25}"#);
        assert_eq!(ClientConfig::from_page(&page).history_limit, 25);

        page.set_inner_html(&script, "{oops");
        assert_eq!(ClientConfig::from_page(&page), ClientConfig::default());
    }
}
