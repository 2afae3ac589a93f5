use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

use userlink_application::{TransportError, TransportResponse, UserApiTransport};
use userlink_core::{AppError, AppResult};

/// HTTP transport for the remote user API backed by `reqwest`.
///
/// Non-2xx answers are reported as [`TransportError`] carrying the status and
/// the response body.
pub struct ReqwestUserApiTransport {
    http_client: reqwest::Client,
    base_url: Url,
}

impl ReqwestUserApiTransport {
    /// Creates a transport rooted at `base_url`.
    ///
    /// A trailing `/` is added when missing so relative paths resolve below
    /// the base path instead of replacing its last segment.
    pub fn new(http_client: reqwest::Client, base_url: &str) -> AppResult<Self> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_owned()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(normalized.as_str()).map_err(|error| {
            AppError::Configuration(format!("invalid user API base URL '{normalized}': {error}"))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::Configuration(format!(
                "user API base URL '{base_url}' cannot be used as a base"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url.join(path).map_err(|error| {
            TransportError::connection(format!("invalid user API path '{path}': {error}"))
        })
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<TransportResponse, TransportError> {
        let response = request.send().await.map_err(|error| TransportError {
            status: error.status(),
            message: format!("user API transport error: {error}"),
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(|error| {
            TransportError::from_status(
                status,
                format!("failed to read user API response body: {error}"),
            )
        })?;

        debug!(status = status.as_u16(), "user API responded");

        if !status.is_success() {
            return Err(TransportError::from_status(status, body));
        }

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl UserApiTransport for ReqwestUserApiTransport {
    async fn get(&self, path: &str) -> Result<TransportResponse, TransportError> {
        let url = self.endpoint(path)?;
        debug!(method = "GET", url = %url, "sending user API request");
        self.send(self.http_client.get(url)).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<TransportResponse, TransportError> {
        let url = self.endpoint(path)?;
        debug!(method = "POST", url = %url, "sending user API request");
        self.send(self.http_client.post(url).json(body)).await
    }
}
