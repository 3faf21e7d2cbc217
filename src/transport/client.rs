use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, redirect};
use tracing::error;

use crate::error::{AppError, AppResult, HttpError, RequestBuildError, TransportError};
use crate::request::RequestSpec;

use super::drain::drain_response_body;
use super::{ResponseHandle, Transport};

/// Client settings fixed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Reuse connections between requests. Off forces a fresh connection
    /// per request.
    pub keep_alive: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            keep_alive: false,
        }
    }
}

/// reqwest-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error when the client cannot be constructed.
    pub fn new(config: &TransportConfig) -> AppResult<Self> {
        let mut client_builder = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(redirect::Policy::none());

        if !config.keep_alive {
            client_builder = client_builder
                .pool_max_idle_per_host(0)
                .pool_idle_timeout(Some(Duration::from_secs(0)));
        }

        let client = match client_builder.build() {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to build HTTP client: {}", e);
                return Err(AppError::http(HttpError::BuildClientFailed { source: e }));
            }
        };

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    type Response = HttpResponse;

    async fn send(&self, request: RequestSpec) -> Result<HttpResponse, TransportError> {
        let RequestSpec {
            method,
            url,
            headers,
            ..
        } = request;

        let built = self
            .client
            .request(method.to_method(), url.as_str())
            .headers(headers)
            .build()
            .map_err(|err| RequestBuildError::InvalidRequest {
                url,
                source: Box::new(err),
            })?;

        let response = self.client.execute(built).await?;
        Ok(HttpResponse { inner: response })
    }
}

/// Live response; dropping it closes the underlying connection.
#[derive(Debug)]
pub struct HttpResponse {
    inner: reqwest::Response,
}

#[async_trait]
impl ResponseHandle for HttpResponse {
    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    async fn drain(self) -> Result<u64, TransportError> {
        drain_response_body(self.inner)
            .await
            .map_err(TransportError::from)
    }
}
