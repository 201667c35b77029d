//! Navigation guards consulted before a protected view is shown

use crate::{models::auth::Role, services::session::SessionStore};

/// Where navigation should go instead of the requested target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    /// Originally requested location, for the post-login return
    pub from: Option<String>,
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

impl Redirect {
    pub fn to(path: &str) -> Self {
        Self {
            to: path.to_string(),
            from: None,
            replace: false,
        }
    }

    fn replacing(path: &str, from: Option<&str>) -> Self {
        Self {
            to: path.to_string(),
            from: from.map(str::to_string),
            replace: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Redirect),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

pub trait RouteGuard: Send + Sync {
    fn check(&self, target: &str, session: &SessionStore) -> GuardDecision;
}

/// Lets any holder of a token through
#[derive(Debug, Clone)]
pub struct AuthGuard {
    login_path: String,
}

impl AuthGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }
}

impl RouteGuard for AuthGuard {
    fn check(&self, target: &str, session: &SessionStore) -> GuardDecision {
        if session.is_authenticated() {
            return GuardDecision::Allow;
        }

        tracing::debug!(target, "Unauthenticated navigation, redirecting to login");
        GuardDecision::Redirect(Redirect::replacing(&self.login_path, Some(target)))
    }
}

/// Authenticated users whose role is in the allow-list.
///
/// Under-privileged users land on `landing_path`, not on the login page.
#[derive(Debug, Clone)]
pub struct RoleGuard {
    auth: AuthGuard,
    allowed: Vec<Role>,
    landing_path: String,
}

impl RoleGuard {
    pub fn new(allowed: Vec<Role>, login_path: impl Into<String>, landing_path: impl Into<String>) -> Self {
        Self {
            auth: AuthGuard::new(login_path),
            allowed,
            landing_path: landing_path.into(),
        }
    }

    pub fn allowed(&self) -> &[Role] {
        &self.allowed
    }
}

impl RouteGuard for RoleGuard {
    fn check(&self, target: &str, session: &SessionStore) -> GuardDecision {
        if let GuardDecision::Redirect(redirect) = self.auth.check(target, session) {
            return GuardDecision::Redirect(redirect);
        }

        match session.role() {
            Some(role) if self.allowed.contains(&role) => GuardDecision::Allow,
            role => {
                tracing::debug!(target, role = ?role, "Role not allowed, redirecting to landing page");
                GuardDecision::Redirect(Redirect::replacing(&self.landing_path, None))
            }
        }
    }
}
