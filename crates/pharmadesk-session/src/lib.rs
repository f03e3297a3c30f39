#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Session credential storage for the Pharmadesk client.
//!
//! The backend issues one opaque bearer token per login. This crate holds
//! that token for the lifetime of the client process (the moral equivalent
//! of a browser tab) and defines the credential newtypes shared by the rest
//! of the workspace. The store is handed around explicitly as an
//! `Arc<SessionStore>` rather than living in ambient global state, so every
//! reader and writer of the token is visible in the dependency graph.

use std::fmt;
use std::sync::Mutex;

use serde::Serialize;

/// Opaque bearer credential returned by `POST /user/login`.
///
/// The token is a claim of authentication, not proof: only a round trip to
/// `POST /user/validate` confirms it is still honoured by the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token string received from the backend.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token value, for building an Authorization header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

// Tokens must never end up in logs or panic messages.
impl fmt::Debug for SessionToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SessionToken(***)")
    }
}

/// Secondary admin password collected by the elevation gate.
///
/// Exists only for the single mutation it authorizes; callers receive it by
/// value and move it into the request payload, so nothing retains it after
/// the request is built.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdminPassword(String);

impl AdminPassword {
    /// Wrap the password string entered at the prompt.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Consume the credential, yielding the raw string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for AdminPassword {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("AdminPassword(***)")
    }
}

/// Holder of the current session token.
///
/// At most one token exists at a time. Written by the login, logout, and
/// validation-failure paths; read by the bearer-injection middleware and the
/// route guard. The single-writer-set/many-readers contract is enforced by
/// convention; the mutex only guards against torn reads across tasks.
#[derive(Default)]
pub struct SessionStore {
    token: Mutex<Option<SessionToken>>,
}

impl SessionStore {
    /// Create an empty (unauthenticated) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token, overwriting any prior value.
    pub fn set_token(&self, token: SessionToken) {
        let mut slot = self.token.lock().expect("session store poisoned");
        let replaced = slot.replace(token).is_some();
        tracing::debug!(replaced, "session token set");
    }

    /// The current token, if any. Presence does not imply validity.
    #[must_use]
    pub fn token(&self) -> Option<SessionToken> {
        self.token.lock().expect("session store poisoned").clone()
    }

    /// Whether a token is currently held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.lock().expect("session store poisoned").is_some()
    }

    /// Drop the token. Idempotent.
    pub fn clear_token(&self) {
        let cleared = self
            .token
            .lock()
            .expect("session store poisoned")
            .take()
            .is_some();
        tracing::debug!(cleared, "session token cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated() {
        let store = SessionStore::new();
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn set_overwrites_prior_token() {
        let store = SessionStore::new();
        store.set_token(SessionToken::new("first"));
        store.set_token(SessionToken::new("second"));
        assert_eq!(store.token(), Some(SessionToken::new("second")));
    }

    #[test]
    fn clear_is_idempotent() {
        let store = SessionStore::new();
        store.set_token(SessionToken::new("abc"));
        store.clear_token();
        store.clear_token();
        assert!(store.token().is_none());
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let token = SessionToken::new("super-secret");
        assert_eq!(format!("{token:?}"), "SessionToken(***)");

        let password = AdminPassword::new("adminpw");
        assert_eq!(format!("{password:?}"), "AdminPassword(***)");
    }

    #[test]
    fn admin_password_serializes_as_bare_string() {
        let password = AdminPassword::new("adminpw");
        let json = serde_json::to_string(&password).expect("serialize");
        assert_eq!(json, "\"adminpw\"");
    }
}
