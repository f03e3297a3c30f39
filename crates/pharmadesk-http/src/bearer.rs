//! Authorization-header augmenter.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use pharmadesk_session::SessionStore;

use crate::error::{HttpError, HttpResult};
use crate::middleware::{Middleware, Next};
use crate::request::RequestDescriptor;
use crate::response::Response;

/// Injects `Authorization: Bearer <token>` when a session token exists.
///
/// A missing token is not an error at this layer; the descriptor is forwarded
/// untouched and the backend's 401 is the enforcement point. `insert`
/// semantics keep the header unique even if a caller supplied its own.
pub struct BearerAuth {
    session: Arc<SessionStore>,
}

impl BearerAuth {
    /// Build the augmenter over the shared session store.
    #[must_use]
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Middleware for BearerAuth {
    async fn handle(&self, request: RequestDescriptor, next: Next<'_>) -> HttpResult<Response> {
        let request = match self.session.token() {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
                    .map_err(|_| HttpError::InvalidHeader {
                        name: "authorization",
                    })?;
                value.set_sensitive(true);
                request.with_header(AUTHORIZATION, value)
            }
            None => request,
        };
        next.run(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pharmadesk_session::SessionToken;
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
    use reqwest::{Method, StatusCode};
    use url::Url;

    use super::*;
    use crate::middleware::Pipeline;
    use crate::transport::Transport;

    #[derive(Default)]
    struct RecordingTransport {
        seen: Mutex<Vec<RequestDescriptor>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: RequestDescriptor) -> HttpResult<Response> {
            self.seen.lock().unwrap().push(request);
            Ok(Response::new(StatusCode::OK, HeaderMap::new(), Vec::new()))
        }
    }

    fn pipeline_with_store(
        session: Arc<SessionStore>,
    ) -> (Pipeline, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::default());
        let pipeline =
            Pipeline::new(transport.clone()).with(Arc::new(BearerAuth::new(session)));
        (pipeline, transport)
    }

    fn descriptor() -> RequestDescriptor {
        RequestDescriptor::new(Method::GET, Url::parse("http://backend.test/user").unwrap())
            .with_header(
                HeaderName::from_static("x-caller"),
                HeaderValue::from_static("kept"),
            )
    }

    #[tokio::test]
    async fn attaches_bearer_header_when_token_present() {
        let session = Arc::new(SessionStore::new());
        session.set_token(SessionToken::new("abc"));
        let (pipeline, transport) = pipeline_with_store(session);

        pipeline.execute(descriptor()).await.unwrap();

        let seen = transport.seen.lock().unwrap();
        let auth: Vec<_> = seen[0].headers.get_all(AUTHORIZATION).iter().collect();
        assert_eq!(auth.len(), 1);
        assert_eq!(auth[0], "Bearer abc");
        assert_eq!(seen[0].headers.get("x-caller").unwrap(), "kept");
    }

    #[tokio::test]
    async fn passes_through_untouched_without_token() {
        let session = Arc::new(SessionStore::new());
        let (pipeline, transport) = pipeline_with_store(session);

        pipeline.execute(descriptor()).await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert!(seen[0].headers.get(AUTHORIZATION).is_none());
        assert_eq!(seen[0].headers.get("x-caller").unwrap(), "kept");
    }

    #[tokio::test]
    async fn replaces_caller_supplied_authorization() {
        let session = Arc::new(SessionStore::new());
        session.set_token(SessionToken::new("fresh"));
        let (pipeline, transport) = pipeline_with_store(session);

        let request = descriptor().with_header(
            AUTHORIZATION,
            HeaderValue::from_static("Bearer stale"),
        );
        pipeline.execute(request).await.unwrap();

        let seen = transport.seen.lock().unwrap();
        let auth: Vec<_> = seen[0].headers.get_all(AUTHORIZATION).iter().collect();
        assert_eq!(auth.len(), 1);
        assert_eq!(auth[0], "Bearer fresh");
    }
}
