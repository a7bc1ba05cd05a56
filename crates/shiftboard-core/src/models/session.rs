//! Authentication session model and route-access decision
//!
//! The session is binary: a non-empty token means authenticated. Token
//! expiry is the API's concern; a protected call answered with 401 is
//! mapped to [`crate::Error::Auth`] and handled like an absent token.

/// Fixed localStorage key the frontend persists the token under.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Current authentication state.
///
/// Created on successful login, cleared on logout or auth failure. An
/// empty token string is normalized to "no token" so a cleared-but-present
/// storage entry never grants access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Build a session from whatever was found in storage.
    pub fn from_stored(token: Option<String>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        Self { token }
    }

    /// Session freshly issued by a successful login.
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self::from_stored(Some(token.into()))
    }

    /// True iff a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Logout. Idempotent.
    pub fn clear(&mut self) {
        self.token = None;
    }

    /// Route guard decision. Re-evaluated on every navigation; callers
    /// must not cache the result across session changes.
    pub fn route_access(&self) -> RouteAccess {
        if self.is_authenticated() {
            RouteAccess::Grant
        } else {
            RouteAccess::RedirectToLogin
        }
    }
}

/// Outcome of guarding a protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Render the protected view.
    Grant,
    /// Do not render; navigate to the login route instead.
    RedirectToLogin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_token_redirects() {
        let session = Session::from_stored(None);
        assert!(!session.is_authenticated());
        assert_eq!(session.route_access(), RouteAccess::RedirectToLogin);
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let session = Session::from_stored(Some(String::new()));
        assert_eq!(session.route_access(), RouteAccess::RedirectToLogin);
    }

    #[test]
    fn test_login_grants_access_immediately() {
        let session = Session::authenticated("abc123");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc123"));
        assert_eq!(session.route_access(), RouteAccess::Grant);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut session = Session::authenticated("abc123");
        session.clear();
        assert_eq!(session.route_access(), RouteAccess::RedirectToLogin);
        session.clear();
        assert_eq!(session.route_access(), RouteAccess::RedirectToLogin);
    }
}
