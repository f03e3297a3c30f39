//! Navigation destinations and screen protection requirements.

/// A destination the application can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The login screen. The only screen reachable without a session.
    Login,
    /// The landing screen after login.
    Home,
}

/// What a protected screen demands of the session before it may render.
///
/// Declared at the point the screen is mounted and re-evaluated on every
/// mount, never cached across navigations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteRequirement {
    /// The session must belong to an admin user.
    pub need_admin: bool,
}

impl RouteRequirement {
    /// Any valid session is sufficient.
    #[must_use]
    pub const fn any_user() -> Self {
        Self { need_admin: false }
    }

    /// Only an admin session is sufficient.
    #[must_use]
    pub const fn admin_only() -> Self {
        Self { need_admin: true }
    }
}
