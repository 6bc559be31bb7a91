use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{ApiErrorBody, SessionProfile};
use crate::utils::{load_from_storage, STORAGE_KEY_SESSION};

/// Failure taxonomy of the transport seam. Hooks absorb these into
/// their error field instead of throwing into the render path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(String),
    #[error("http {status}: {message}")]
    Http { status: u16, message: String },
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("request timed out after {0}s")]
    TimedOut(u32),
}

/// Stateless typed client bound to a base URL and an optional bearer
/// token. Constructing one performs no I/O.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    bearer_token: Option<String>,
    timeout_seconds: u32,
}

impl ApiClient {
    pub fn new(base_url: Option<String>, bearer_token: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| CONFIG.api_base().to_string()),
            bearer_token,
            timeout_seconds: CONFIG.network_timeout_seconds,
        }
    }

    /// Client for the logged-in operator: default base URL, token from
    /// the persisted session (if any).
    pub fn from_session() -> Self {
        let token = load_from_storage::<SessionProfile>(STORAGE_KEY_SESSION).map(|s| s.token);
        Self::new(None, token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .prepare(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.dispatch(request).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .prepare(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(format!("request build error: {}", e)))?;
        self.dispatch(request).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .prepare(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(format!("request build error: {}", e)))?;
        self.dispatch(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .prepare(Request::delete(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.dispatch(request).await
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Content-Type", "application/json");
        match bearer_header(self.bearer_token.as_deref()) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = self.send_with_timeout(request).await?;
        decode_response(response).await
    }

    /// Races the request against the configured timeout; the loser of
    /// the race is dropped, the browser fetch is not aborted.
    async fn send_with_timeout(&self, request: Request) -> Result<Response, ApiError> {
        let timeout_ms = self.timeout_seconds.saturating_mul(1000);
        let send = request.send();
        futures::pin_mut!(send);

        match select(send, TimeoutFuture::new(timeout_ms)).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
            Either::Right(_) => Err(ApiError::TimedOut(self.timeout_seconds)),
        }
    }
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Http {
            status,
            message: http_error_message(&response.status_text(), &body),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Prefers the backend's structured error message, falls back to the
/// raw body, then to the status line.
fn http_error_message(status_text: &str, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.message;
    }
    if body.is_empty() {
        status_text.to_string()
    } else {
        body.to_string()
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {}", t))
}

/// Opt-in linear-backoff retry around an idempotent fetch. Resources
/// that want resilience wrap their fetcher in this explicitly.
pub async fn fetch_with_retry<T, F, Fut>(attempts: u32, mut operation: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= attempts {
                    return Err(error);
                }
                attempt += 1;
                log::warn!("🔄 Retry {}/{} after error: {}", attempt, attempts, error);
                TimeoutFuture::new(500 * attempt).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_header_is_built_iff_token_present() {
        assert_eq!(bearer_header(Some("abc123")), Some("Bearer abc123".to_string()));
        assert_eq!(bearer_header(None), None);
        // An empty token is treated as absent
        assert_eq!(bearer_header(Some("")), None);
    }

    #[test]
    fn url_join_handles_trailing_slash() {
        assert_eq!(
            join_url("http://localhost:8080", "/api/v1/campaigns"),
            "http://localhost:8080/api/v1/campaigns"
        );
        assert_eq!(
            join_url("http://localhost:8080/", "/api/v1/campaigns"),
            "http://localhost:8080/api/v1/campaigns"
        );
    }

    #[test]
    fn http_error_prefers_structured_message() {
        assert_eq!(
            http_error_message("Bad Request", r#"{"message":"title too long","status":400}"#),
            "title too long"
        );
        assert_eq!(http_error_message("Bad Request", "plain text"), "plain text");
        assert_eq!(http_error_message("Bad Request", ""), "Bad Request");
    }

    #[test]
    fn error_display_names_the_failure() {
        let error = ApiError::Http { status: 404, message: "not found".to_string() };
        assert_eq!(error.to_string(), "http 404: not found");
        assert_eq!(ApiError::TimedOut(30).to_string(), "request timed out after 30s");
    }
}
