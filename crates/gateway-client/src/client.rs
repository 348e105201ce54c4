use dashboard_core::{ApiResponse, GatewayError, GatewayResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::GatewayConfig;

const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Per-call options. Headers given here are merged over the JSON defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> GatewayResult<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| GatewayError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// HTTP client for the dashboard API.
///
/// `call` only knows about transport and HTTP status failures; the
/// per-domain wrappers in the sibling modules add the envelope check.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(GatewayConfig::default())
    }

    /// Get the base URL (for logging/diagnostics)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> GatewayResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        tracing::debug!("{} {}", options.method, url);

        let mut request = self
            .client
            .request(options.method.clone(), &url)
            .headers(headers);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.body {
            request = request.body(body.to_string());
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or_else(|_| serde_json::json!({}));
            let message = error_message(&body);
            tracing::warn!(
                "{} {} failed with {}: {}",
                options.method,
                url,
                status.as_u16(),
                message
            );
            return Err(GatewayError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }

    /// Call an enveloped endpoint and require `success && data`.
    pub(crate) async fn fetch_data<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
        failure: &str,
    ) -> GatewayResult<T> {
        self.call::<ApiResponse<T>>(endpoint, options)
            .await?
            .into_data(failure)
    }

    /// Call an enveloped endpoint that carries no payload.
    pub(crate) async fn fetch_unit(
        &self,
        endpoint: &str,
        options: RequestOptions,
        failure: &str,
    ) -> GatewayResult<()> {
        self.call::<ApiResponse<serde_json::Value>>(endpoint, options)
            .await?
            .into_unit(failure)
    }
}

fn error_message(body: &serde_json::Value) -> String {
    ["error", "message"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(|v| v.as_str()))
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
        .to_string()
}
