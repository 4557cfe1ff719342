//! Request client for the workflow API.
//!
//! [`ApiClient::request`] never fails: transport errors, non-2xx statuses and
//! everything in between come back as a [`RequestResult`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{json, Value};
use shared::RequestResult;

use crate::config::ClientConfig;
use crate::error::TransportError;

pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

const INVALID_JSON: &str = "Invalid JSON response";
const CONNECTION_ERROR: &str = "Connection error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

pub type Headers = BTreeMap<String, String>;

/// Caller overrides for a single request. Unset fields keep the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Option<Method>,
    /// Replaces the default header map wholesale when set.
    pub headers: Option<Headers>,
    pub body: Option<String>,
    /// Carried to the transport but not enforced.
    // TODO: wire into an AbortController once the backend agrees on a
    // client-side deadline.
    pub timeout_ms: Option<u32>,
}

impl RequestOptions {
    pub fn defaults() -> Self {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            method: Some(Method::Get),
            headers: Some(headers),
            body: None,
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn method(method: Method) -> Self {
        Self {
            method: Some(method),
            ..Self::default()
        }
    }

    /// Shallow merge: every field set on `self` wins over `base`.
    pub fn merged_over(self, base: RequestOptions) -> RequestOptions {
        RequestOptions {
            method: self.method.or(base.method),
            headers: self.headers.or(base.headers),
            body: self.body.or(base.body),
            timeout_ms: self.timeout_ms.or(base.timeout_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
    pub timeout_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP exchange.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

pub struct ApiClient<T> {
    base_url: String,
    timeout_ms: u32,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            transport,
        }
    }

    pub fn from_config(config: &ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout_ms,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn build(&self, endpoint: &str, options: RequestOptions) -> HttpRequest {
        let defaults = RequestOptions {
            timeout_ms: Some(self.timeout_ms),
            ..RequestOptions::defaults()
        };
        let merged = options.merged_over(defaults);
        HttpRequest {
            method: merged.method.unwrap_or(Method::Get),
            url: format!("{}{}", self.base_url, endpoint),
            headers: merged.headers.unwrap_or_default(),
            body: merged.body,
            timeout_ms: merged.timeout_ms.unwrap_or(self.timeout_ms),
        }
    }

    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> RequestResult {
        let request = self.build(endpoint, options);
        let method = request.method;
        let url = request.url.clone();
        tracing::debug!("{} {}", method.as_str(), url);

        match self.exchange(request).await {
            Ok(data) => RequestResult::success(data),
            Err(e) => {
                let message = e.to_string();
                let message = if message.is_empty() {
                    CONNECTION_ERROR.to_string()
                } else {
                    message
                };
                tracing::warn!(
                    status = ?e.status(),
                    "API error on {} {}: {}",
                    method.as_str(),
                    url,
                    message
                );
                // HTTP status stays in the log; failures share one shape.
                RequestResult::failure(message, None)
            }
        }
    }

    async fn exchange(&self, request: HttpRequest) -> Result<Value, TransportError> {
        let response = self.transport.send(request).await?;

        let parsed = serde_json::from_str::<Value>(&response.body).ok();
        if !response.ok() {
            let message = parsed
                .as_ref()
                .and_then(|body| body.get("error"))
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", response.status));
            return Err(TransportError::Status {
                message,
                status: response.status,
            });
        }

        Ok(parsed.unwrap_or_else(|| json!({ "error": INVALID_JSON })))
    }

    pub async fn workflow_status(&self) -> RequestResult {
        self.request("/workflow-status", RequestOptions::default())
            .await
    }

    /// `limit` defaults to ten runs.
    pub async fn workflow_history(&self, limit: Option<u32>) -> RequestResult {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        self.request(
            &format!("/workflow-history?limit={}", limit),
            RequestOptions::default(),
        )
        .await
    }

    pub async fn trigger_workflow(&self) -> RequestResult {
        self.request("/trigger-workflow", RequestOptions::method(Method::Post))
            .await
    }

    pub async fn health(&self) -> RequestResult {
        self.request("/health", RequestOptions::default()).await
    }
}
