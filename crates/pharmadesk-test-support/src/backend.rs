//! A scripted stand-in for the pharmacy backend, built on `httpmock`.

use httpmock::prelude::*;
use httpmock::{Method, Mock};
use serde_json::json;

/// A mock pharmacy backend. Routes are mounted under `/api/v1` to match
/// the real server's path layout, so clients can point at [`api_url`]
/// without reconfiguration.
///
/// [`api_url`]: MockBackend::api_url
pub struct MockBackend {
    server: MockServer,
}

impl MockBackend {
    /// Start a mock backend on an ephemeral local port.
    #[must_use]
    pub fn start() -> Self {
        Self {
            server: MockServer::start(),
        }
    }

    /// Base URL including the `/api/v1` prefix, suitable for client config.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("{}/api/v1", self.server.base_url())
    }

    /// The underlying mock server, for scripting routes not covered by
    /// the helpers below.
    #[must_use]
    pub const fn server(&self) -> &MockServer {
        &self.server
    }

    /// Script `POST /user/login` to accept any credentials and answer
    /// with the given token.
    pub fn mock_login(&self, token: &str) -> Mock<'_> {
        let token = token.to_owned();
        self.server.mock(|when, then| {
            when.method(POST).path("/api/v1/user/login");
            then.status(200).json_body(json!({ "token": token }));
        })
    }

    /// Script `GET /user/logout` to succeed.
    pub fn mock_logout_ok(&self) -> Mock<'_> {
        self.server.mock(|when, then| {
            when.method(GET).path("/api/v1/user/logout");
            then.status(200).json_body(json!("logged out"));
        })
    }

    /// Script `POST /user/validate` to accept the session.
    pub fn mock_validate_ok(&self) -> Mock<'_> {
        self.server.mock(|when, then| {
            when.method(POST).path("/api/v1/user/validate");
            then.status(200).json_body(json!("valid"));
        })
    }

    /// Script `POST /user/validate` to refuse the session with the given
    /// status code.
    pub fn mock_validate_denied(&self, status: u16, message: &str) -> Mock<'_> {
        let message = message.to_owned();
        self.server.mock(|when, then| {
            when.method(POST).path("/api/v1/user/validate");
            then.status(status).json_body(json!({ "error": message }));
        })
    }

    /// Script an arbitrary route to fail with the backend's error shape.
    pub fn mock_error(&self, method: Method, path: &str, status: u16, message: &str) -> Mock<'_> {
        let path = format!("/api/v1/{path}");
        let message = message.to_owned();
        self.server.mock(move |when, then| {
            when.method(method).path(path);
            then.status(status).json_body(json!({ "error": message }));
        })
    }
}
