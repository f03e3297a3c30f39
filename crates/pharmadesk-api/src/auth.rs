//! Login, logout, and session validation.
//!
//! These are the only endpoints the route guard and login screen touch.
//! `login` is the single place a token enters the session store; `logout`
//! and the guard's invalid-session path are the places it leaves.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use pharmadesk_session::SessionToken;

use crate::client::ApiClient;
use crate::error::ApiResult;

#[derive(Serialize)]
struct LoginPayload<'a> {
    name: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidatePayload {
    need_admin: bool,
}

/// Outcome of a `POST /user/validate` round trip that reached the backend.
///
/// Transport failures are *not* represented here; they surface as `Err` and
/// callers must fail closed on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCheck {
    /// Token accepted (and admin rights confirmed when requested).
    Valid,
    /// Token refused.
    Denied(DeniedReason),
}

/// Why the backend refused the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeniedReason {
    /// The session is real but lacks admin privilege (HTTP 403).
    MissingAdmin,
    /// No usable session: token expired, revoked, or unknown (HTTP 401, or
    /// any other refusal we cannot interpret more precisely).
    InvalidSession,
}

impl ApiClient {
    /// `POST /user/login`. On success the returned token is stored,
    /// replacing any prior session.
    pub async fn login(&self, name: &str, password: &str) -> ApiResult<()> {
        let response = self
            .post("user/login", &LoginPayload { name, password })
            .await?;
        let body: LoginResponse = Self::expect_json(&response)?;
        self.session().set_token(SessionToken::new(body.token));
        tracing::info!(user = name, "logged in");
        Ok(())
    }

    /// `GET /user/logout`. The local token is cleared only once the backend
    /// confirms, so a failed call can be retried.
    pub async fn logout(&self) -> ApiResult<()> {
        let response = self.get("user/logout").await?;
        Self::expect_ok(&response)?;
        self.session().clear_token();
        tracing::info!("logged out");
        Ok(())
    }

    /// `POST /user/validate` with the current bearer token attached.
    ///
    /// Distinguishes "valid but not admin" (403) from "no valid session"
    /// (401); any other refusal is folded into the latter so callers always
    /// fail closed.
    pub async fn validate_session(&self, need_admin: bool) -> ApiResult<SessionCheck> {
        let response = self
            .post("user/validate", &ValidatePayload { need_admin })
            .await?;

        let check = if response.is_success() {
            SessionCheck::Valid
        } else if response.status() == StatusCode::FORBIDDEN {
            SessionCheck::Denied(DeniedReason::MissingAdmin)
        } else {
            SessionCheck::Denied(DeniedReason::InvalidSession)
        };
        tracing::debug!(need_admin, ?check, "session validated");
        Ok(check)
    }
}
