//! Per-screen session checks.
//!
//! Every protected screen is wrapped in a [`RouteGuard`]. Mounting the
//! screen produces a [`GuardMount`], a single-use check that either admits
//! the screen or redirects away. Children render only after admission, so
//! protected content is never flashed before the backend has answered.

use std::sync::Arc;

use pharmadesk_api::{ApiClient, DeniedReason, SessionCheck};

use crate::navigator::Navigator;
use crate::route::{Route, RouteRequirement};

/// The verdict of one mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Render the protected children.
    Admitted,
    /// The navigator was sent to this route; render nothing.
    Redirected(Route),
}

/// Gatekeeper shared by all protected screens.
pub struct RouteGuard {
    api: Arc<ApiClient>,
    navigator: Arc<dyn Navigator>,
}

impl RouteGuard {
    /// Build a guard over the given client and navigator.
    #[must_use]
    pub fn new(api: Arc<ApiClient>, navigator: Arc<dyn Navigator>) -> Self {
        Self { api, navigator }
    }

    /// Begin one admission check for a screen with the given requirement.
    ///
    /// The requirement is captured per mount and never cached; navigating
    /// away and back produces a fresh mount and a fresh check.
    #[must_use]
    pub fn mount(&self, requirement: RouteRequirement) -> GuardMount {
        GuardMount {
            api: Arc::clone(&self.api),
            navigator: Arc::clone(&self.navigator),
            requirement,
        }
    }
}

/// One in-flight admission check.
///
/// [`resolve`] consumes the mount, so a second validation call for the same
/// mount cannot be issued. Dropping an unresolved mount (the screen was left
/// before the check finished) abandons the check without navigating.
///
/// [`resolve`]: GuardMount::resolve
pub struct GuardMount {
    api: Arc<ApiClient>,
    navigator: Arc<dyn Navigator>,
    requirement: RouteRequirement,
}

impl GuardMount {
    /// Run the check to a terminal state, issuing at most one redirect.
    ///
    /// Fails closed: a transport failure or an unreadable response is
    /// treated the same as an explicit refusal.
    pub async fn resolve(self) -> Admission {
        if !self.api.session().is_authenticated() {
            tracing::debug!("no session token, skipping validation");
            return self.redirect(Route::Login);
        }

        match self.api.validate_session(self.requirement.need_admin).await {
            Ok(SessionCheck::Valid) => {
                tracing::debug!(need_admin = self.requirement.need_admin, "screen admitted");
                Admission::Admitted
            }
            Ok(SessionCheck::Denied(DeniedReason::MissingAdmin)) => {
                // The session itself is fine, so the token stays.
                tracing::warn!("admin privilege required, sending home");
                self.redirect(Route::Home)
            }
            Ok(SessionCheck::Denied(DeniedReason::InvalidSession)) => {
                tracing::warn!("session refused, clearing token");
                self.evict()
            }
            Err(error) => {
                tracing::warn!(%error, "validation unreachable, failing closed");
                self.evict()
            }
        }
    }

    /// Clear the token before navigating so a later mount cannot observe a
    /// stale valid-looking session.
    fn evict(self) -> Admission {
        self.api.session().clear_token();
        self.redirect(Route::Login)
    }

    fn redirect(self, route: Route) -> Admission {
        self.navigator.redirect(route);
        Admission::Redirected(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use pharmadesk_api::ClientConfig;
    use pharmadesk_session::{SessionStore, SessionToken};
    use pharmadesk_test_support::backend::MockBackend;

    #[derive(Default)]
    struct RecordingNavigator {
        redirects: Mutex<Vec<Route>>,
    }

    impl RecordingNavigator {
        fn redirects(&self) -> Vec<Route> {
            self.redirects.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn redirect(&self, route: Route) {
            self.redirects.lock().unwrap().push(route);
        }
    }

    fn guard_over(backend: &MockBackend) -> (RouteGuard, Arc<SessionStore>, Arc<RecordingNavigator>) {
        let session = Arc::new(SessionStore::new());
        let config = ClientConfig::new(backend.api_url().parse().unwrap());
        let api = Arc::new(ApiClient::new(config, Arc::clone(&session)).unwrap());
        let navigator = Arc::new(RecordingNavigator::default());
        let guard = RouteGuard::new(api, Arc::clone(&navigator) as Arc<dyn Navigator>);
        (guard, session, navigator)
    }

    #[tokio::test]
    async fn missing_token_redirects_to_login_without_network() {
        let backend = MockBackend::start();
        let validate = backend.mock_validate_ok();
        let (guard, _session, navigator) = guard_over(&backend);

        let admission = guard.mount(RouteRequirement::any_user()).resolve().await;

        assert_eq!(admission, Admission::Redirected(Route::Login));
        assert_eq!(navigator.redirects(), vec![Route::Login]);
        validate.assert_calls(0);
    }

    #[tokio::test]
    async fn valid_session_admits_and_never_navigates() {
        let backend = MockBackend::start();
        let validate = backend.server().mock(|when, then| {
            when.method(httpmock::Method::POST)
                .path("/api/v1/user/validate")
                .header("authorization", "Bearer abc")
                .json_body(serde_json::json!({ "needAdmin": false }));
            then.status(200).json_body(serde_json::json!("valid"));
        });
        let (guard, session, navigator) = guard_over(&backend);
        session.set_token(SessionToken::new("abc"));

        let admission = guard.mount(RouteRequirement::any_user()).resolve().await;

        assert_eq!(admission, Admission::Admitted);
        assert!(navigator.redirects().is_empty());
        validate.assert_calls(1);
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn refused_session_clears_token_then_redirects_to_login() {
        let backend = MockBackend::start();
        backend.mock_validate_denied(401, "token expired");
        let (guard, session, navigator) = guard_over(&backend);
        session.set_token(SessionToken::new("stale"));

        let admission = guard.mount(RouteRequirement::any_user()).resolve().await;

        assert_eq!(admission, Admission::Redirected(Route::Login));
        assert_eq!(navigator.redirects(), vec![Route::Login]);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn missing_admin_keeps_token_and_sends_home() {
        let backend = MockBackend::start();
        backend.mock_validate_denied(403, "not admin");
        let (guard, session, navigator) = guard_over(&backend);
        session.set_token(SessionToken::new("abc"));

        let admission = guard.mount(RouteRequirement::admin_only()).resolve().await;

        assert_eq!(admission, Admission::Redirected(Route::Home));
        assert_eq!(navigator.redirects(), vec![Route::Home]);
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn unreachable_backend_fails_closed() {
        let session = Arc::new(SessionStore::new());
        session.set_token(SessionToken::new("abc"));
        // Port 1 is never listening.
        let config = ClientConfig::new("http://127.0.0.1:1/api/v1".parse().unwrap());
        let api = Arc::new(ApiClient::new(config, Arc::clone(&session)).unwrap());
        let navigator = Arc::new(RecordingNavigator::default());
        let guard = RouteGuard::new(api, Arc::clone(&navigator) as Arc<dyn Navigator>);

        let admission = guard.mount(RouteRequirement::any_user()).resolve().await;

        assert_eq!(admission, Admission::Redirected(Route::Login));
        assert!(!session.is_authenticated());
    }
}
