//! REST adapter for the taskboard server.
//!
//! DESIGN
//! ======
//! Thin wrapper over `reqwest`: every call is a single attempt with JSON
//! encoding and an optional `Authorization: Token <token>` header. No retry,
//! no timeout, no circuit breaking; failures surface to the action layer,
//! which turns them into error events.
//!
//! ERROR HANDLING
//! ==============
//! Transport, HTTP-status, and decode failures are distinct [`ApiError`]
//! variants. Error response bodies are kept as structured JSON when the
//! server sends JSON, and wrapped as a JSON string otherwise, so reducers
//! always receive a `serde_json::Value` payload.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::Method;
use reqwest::header;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to build http client: {0}")]
    Build(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("http {status}")]
    Status { status: u16, body: serde_json::Value },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by this error, or 0 for non-HTTP failures.
    pub fn status(&self) -> u16 {
        match self {
            Self::Status { status, .. } => *status,
            Self::Build(_) | Self::Transport(_) | Self::Decode(_) => 0,
        }
    }

    /// Structured payload describing this error, suitable for display.
    pub fn body(&self) -> serde_json::Value {
        match self {
            Self::Status { body, .. } => body.clone(),
            Self::Build(msg) | Self::Transport(msg) | Self::Decode(msg) => {
                serde_json::Value::String(msg.clone())
            }
        }
    }
}

/// HTTP client bound to one server base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (scheme + authority, no
    /// trailing slash required).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Build`] if the underlying client cannot be
    /// constructed.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError> {
        Self::execute(self.request(Method::GET, path, token)).await
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        Self::execute(self.request(Method::POST, path, token).json(body)).await
    }

    /// `POST` with no body, ignoring the response body. Used for logout.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn post_empty(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        Self::execute_empty(self.request(Method::POST, path, token)).await
    }

    /// `PUT` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        Self::execute(self.request(Method::PUT, path, token).json(body)).await
    }

    /// `DELETE` a resource, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        Self::execute_empty(self.request(Method::DELETE, path, token)).await
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .request(method, format!("{}{path}", self.base_url))
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Token {token}"));
        }
        req
    }

    async fn execute<T: DeserializeOwned>(req: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let text = Self::read_ok_body(req).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn execute_empty(req: reqwest::RequestBuilder) -> Result<(), ApiError> {
        Self::read_ok_body(req).await.map(|_| ())
    }

    async fn read_ok_body(req: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = req.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(ApiError::Status { status, body: parse_error_body(&text) });
        }
        Ok(text)
    }
}

/// Keep structured JSON error bodies structured; wrap anything else as a
/// JSON string.
fn parse_error_body(text: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_owned()))
}
