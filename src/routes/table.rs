//! Path-to-view table with the guard each view declares

use crate::{
    config::RoutesConfig,
    models::auth::Role,
    services::session::SessionStore,
};

use super::guards::{AuthGuard, GuardDecision, Redirect, RoleGuard, RouteGuard};

/// Path every unknown location is sent to
pub const CATCH_ALL: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
    Roles(Vec<Role>),
}

#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub pattern: String,
    pub view: String,
    pub access: RouteAccess,
}

impl RouteEntry {
    /// Segment-wise match; `:name` segments accept any non-empty value
    pub fn matches(&self, path: &str) -> bool {
        let mut wanted = segments(&self.pattern);
        let mut given = segments(path);

        loop {
            match (wanted.next(), given.next()) {
                (None, None) => return true,
                (Some(w), Some(g)) if w.starts_with(':') || w == g => continue,
                _ => return false,
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(String),
    Redirect(Redirect),
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    login_path: String,
    landing_path: String,
}

impl RouteTable {
    pub fn new(config: &RoutesConfig) -> Self {
        Self {
            entries: Vec::new(),
            login_path: config.login_path.clone(),
            landing_path: config.landing_path.clone(),
        }
    }

    /// Pages of the library front-end
    pub fn standard(config: &RoutesConfig) -> Self {
        use RouteAccess::*;

        let admin = || Roles(vec![Role::Admin]);

        Self::new(config)
            .route("/", "landing", Public)
            .route(&config.login_path, "login", Public)
            .route("/register", "register", Public)
            .route("/home", "home", Authenticated)
            .route("/books", "books", Authenticated)
            .route("/books/:id", "book", Authenticated)
            .route("/authors", "authors", Authenticated)
            .route("/rentals", "rentals", Authenticated)
            .route("/exhibitions", "exhibitions", Authenticated)
            .route("/exhibitions/:id", "exhibition", Authenticated)
            .route("/seminars", "seminars", Authenticated)
            .route("/seminars/:id", "seminar", Authenticated)
            .route("/my-registrations", "my-registrations", Authenticated)
            .route("/my-invitations", "my-invitations", Authenticated)
            .route("/room-reservations", "room-reservations", Authenticated)
            .route("/invoices", "invoices", Authenticated)
            .route("/admin", "admin", admin())
            .route("/rooms", "rooms", admin())
    }

    pub fn route(mut self, pattern: &str, view: &str, access: RouteAccess) -> Self {
        self.entries.push(RouteEntry {
            pattern: pattern.to_string(),
            view: view.to_string(),
            access,
        });
        self
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// First entry matching `path`, ignoring any query string or fragment
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        self.entries.iter().find(|entry| entry.matches(path))
    }

    fn guard(&self, access: &RouteAccess) -> Option<Box<dyn RouteGuard>> {
        match access {
            RouteAccess::Public => None,
            RouteAccess::Authenticated => Some(Box::new(AuthGuard::new(self.login_path.as_str()))),
            RouteAccess::Roles(roles) => Some(Box::new(RoleGuard::new(
                roles.clone(),
                self.login_path.as_str(),
                self.landing_path.as_str(),
            ))),
        }
    }

    /// Decide what happens when the user navigates to `path`
    pub fn navigate(&self, path: &str, session: &SessionStore) -> Navigation {
        let Some(entry) = self.resolve(path) else {
            tracing::debug!(path, "No route matched, using catch-all");
            return Navigation::Redirect(Redirect {
                to: CATCH_ALL.to_string(),
                from: None,
                replace: true,
            });
        };

        let decision = self
            .guard(&entry.access)
            .map_or(GuardDecision::Allow, |guard| guard.check(path, session));

        match decision {
            GuardDecision::Allow => Navigation::Render(entry.view.clone()),
            GuardDecision::Redirect(redirect) => Navigation::Redirect(redirect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::standard(&RoutesConfig::default())
    }

    fn redirect_target(nav: Navigation) -> String {
        match nav {
            Navigation::Redirect(redirect) => redirect.to,
            Navigation::Render(view) => panic!("expected a redirect, rendered {}", view),
        }
    }

    #[test]
    fn test_param_segments_match() {
        let table = table();
        assert_eq!(table.resolve("/books/42").map(|e| e.view.as_str()), Some("book"));
        assert_eq!(table.resolve("/books/").map(|e| e.view.as_str()), Some("books"));
        assert_eq!(table.resolve("/seminars/7?tab=sponsors").map(|e| e.view.as_str()), Some("seminar"));
        assert!(table.resolve("/books/42/copies").is_none());
    }

    #[test]
    fn test_public_pages_render_for_guests() {
        let session = SessionStore::in_memory();
        assert_eq!(table().navigate("/login", &session), Navigation::Render("login".into()));
        assert_eq!(table().navigate("/register", &session), Navigation::Render("register".into()));
    }

    #[test]
    fn test_guest_is_sent_to_login_with_origin() {
        let session = SessionStore::in_memory();
        match table().navigate("/books/3", &session) {
            Navigation::Redirect(redirect) => {
                assert_eq!(redirect.to, "/login");
                assert_eq!(redirect.from.as_deref(), Some("/books/3"));
                assert!(redirect.replace);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_admin_pages() {
        let session = SessionStore::in_memory();
        session.set_session("tok", Some(Role::Customer), None).unwrap();
        assert_eq!(redirect_target(table().navigate("/rooms", &session)), "/home");
        assert_eq!(table().navigate("/rentals", &session), Navigation::Render("rentals".into()));

        session.set_session("tok", Some(Role::Admin), None).unwrap();
        assert_eq!(table().navigate("/rooms", &session), Navigation::Render("rooms".into()));
    }

    #[test]
    fn test_unknown_path_hits_catch_all() {
        let session = SessionStore::in_memory();
        assert_eq!(redirect_target(table().navigate("/nowhere", &session)), "/");
    }
}
