//! Ordered augmenter chain ending in the network transport.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::HttpResult;
use crate::request::RequestDescriptor;
use crate::response::Response;
use crate::transport::Transport;

/// A stage that may inspect or modify a request before it is sent.
///
/// A stage has three options: forward a (possibly modified) descriptor with
/// `next.run(request)`, short-circuit by returning a [`Response`] without
/// calling `next`, or fail by returning an error. Errors propagate to the
/// caller unmodified.
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Process `request`, delegating to `next` to continue the chain.
    async fn handle(&self, request: RequestDescriptor, next: Next<'_>) -> HttpResult<Response>;
}

/// Continuation over the remaining chain.
///
/// Stage *i* only ever sees a `Next` covering stages *i+1..n*, so each stage
/// observes the cumulative effect of everything before it, and the transport
/// observes the fully augmented descriptor.
pub struct Next<'a> {
    remaining: &'a [Arc<dyn Middleware>],
    transport: &'a dyn Transport,
}

impl Next<'_> {
    /// Run the rest of the chain with `request`.
    pub async fn run(self, request: RequestDescriptor) -> HttpResult<Response> {
        match self.remaining.split_first() {
            Some((stage, rest)) => {
                let next = Next {
                    remaining: rest,
                    transport: self.transport,
                };
                stage.handle(request, next).await
            }
            None => self.transport.send(request).await,
        }
    }
}

/// An augmenter chain plus its terminal transport.
///
/// Stages execute strictly in registration order.
pub struct Pipeline {
    chain: Vec<Arc<dyn Middleware>>,
    transport: Arc<dyn Transport>,
}

impl Pipeline {
    /// A pipeline with no augmenters, just the terminal.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            chain: Vec::new(),
            transport,
        }
    }

    /// Append a stage to the end of the chain.
    #[must_use]
    pub fn with(mut self, stage: Arc<dyn Middleware>) -> Self {
        self.chain.push(stage);
        self
    }

    /// Push `request` through the chain and return the terminal's response.
    pub async fn execute(&self, request: RequestDescriptor) -> HttpResult<Response> {
        let next = Next {
            remaining: &self.chain,
            transport: self.transport.as_ref(),
        };
        next.run(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
    use reqwest::{Method, StatusCode};
    use url::Url;

    use super::*;
    use crate::error::HttpError;

    /// Terminal that records the descriptor it received and replies 200.
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

    /// Stage that appends a marker header before forwarding.
    struct Tagger {
        name: &'static str,
        value: &'static str,
    }

    #[async_trait]
    impl Middleware for Tagger {
        async fn handle(&self, request: RequestDescriptor, next: Next<'_>) -> HttpResult<Response> {
            let request = request.with_header(
                HeaderName::from_static(self.name),
                HeaderValue::from_static(self.value),
            );
            next.run(request).await
        }
    }

    /// Stage that answers without touching the network.
    struct ShortCircuit;

    #[async_trait]
    impl Middleware for ShortCircuit {
        async fn handle(&self, _request: RequestDescriptor, _next: Next<'_>) -> HttpResult<Response> {
            Ok(Response::new(
                StatusCode::IM_A_TEAPOT,
                HeaderMap::new(),
                Vec::new(),
            ))
        }
    }

    /// Stage that fails outright.
    struct Failing;

    #[async_trait]
    impl Middleware for Failing {
        async fn handle(&self, _request: RequestDescriptor, _next: Next<'_>) -> HttpResult<Response> {
            Err(HttpError::InvalidHeader {
                name: "x-faulty-stage",
            })
        }
    }

    fn descriptor() -> RequestDescriptor {
        RequestDescriptor::new(Method::GET, Url::parse("http://backend.test/ping").unwrap())
    }

    #[tokio::test]
    async fn terminal_sees_every_augmentation_in_order() {
        let transport = Arc::new(RecordingTransport::default());
        let pipeline = Pipeline::new(transport.clone())
            .with(Arc::new(Tagger {
                name: "x-first",
                value: "1",
            }))
            .with(Arc::new(Tagger {
                name: "x-second",
                value: "2",
            }));

        let response = pipeline.execute(descriptor()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].headers.get("x-first").unwrap(), "1");
        assert_eq!(seen[0].headers.get("x-second").unwrap(), "2");
    }

    #[tokio::test]
    async fn short_circuit_skips_the_transport() {
        let transport = Arc::new(RecordingTransport::default());
        let pipeline = Pipeline::new(transport.clone()).with(Arc::new(ShortCircuit));

        let response = pipeline.execute(descriptor()).await.unwrap();
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert!(transport.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stage_errors_reach_the_caller_unmodified() {
        let transport = Arc::new(RecordingTransport::default());
        let pipeline = Pipeline::new(transport.clone()).with(Arc::new(Failing));

        let error = pipeline.execute(descriptor()).await.unwrap_err();
        assert!(matches!(
            error,
            HttpError::InvalidHeader {
                name: "x-faulty-stage"
            }
        ));
        assert!(transport.seen.lock().unwrap().is_empty());
    }
}
