//! Terminal stage: the actual network round trip.

use async_trait::async_trait;

use crate::error::{HttpError, HttpResult};
use crate::request::RequestDescriptor;
use crate::response::Response;

/// The stage at the end of every pipeline.
///
/// Abstracted behind a trait so tests can substitute a recording fake and
/// never open a socket.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Dispatch the fully augmented request and buffer the response.
    async fn send(&self, request: RequestDescriptor) -> HttpResult<Response>;
}

/// Production transport backed by a shared [`reqwest::Client`].
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap a configured client (timeouts etc. live on the client).
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestDescriptor) -> HttpResult<Response> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| HttpError::Transport { source })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|source| HttpError::Transport { source })?
            .to_vec();

        tracing::trace!(%status, url = %request.url, "request completed");
        Ok(Response::new(status, headers, body))
    }
}
