//! HZS Library client
//!
//! Typed Rust client for the HZS library REST API: a session store holding
//! the bearer token, an HTTP core that attaches it and normalizes failures,
//! per-resource clients, the login/logout flow, and the route guards that
//! gate navigation on authentication and role.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod routes;
pub mod services;

pub use config::AppConfig;
pub use error::{ApiError, ApiErrorKind, ApiResult, AppError, AppResult};

use http::{HttpClient, ReqwestTransport, Transport};
use routes::RouteTable;
use services::{AuthService, FileStorage, SessionStorage, SessionStore};

/// Everything a front-end needs, wired around one shared session
#[derive(Clone)]
pub struct LibraryClient {
    pub config: Arc<AppConfig>,
    pub session: SessionStore,
    pub http: HttpClient,
    pub api: api::Api,
    pub auth: AuthService,
    pub routes: Arc<RouteTable>,
}

impl LibraryClient {
    /// File-backed session at `session.path`, real network transport
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let transport = ReqwestTransport::new(&config.api.user_agent)?;
        let storage = FileStorage::new(config.session.path.clone());
        Self::with_parts(config, Arc::new(transport), Arc::new(storage))
    }

    pub fn with_parts(
        config: AppConfig,
        transport: Arc<dyn Transport>,
        storage: Arc<dyn SessionStorage>,
    ) -> AppResult<Self> {
        let session = SessionStore::open(storage)?;
        let http = HttpClient::new(transport, &config.api.base_url, session.clone());
        let auth = AuthService::new(
            http.clone(),
            session.clone(),
            config.auth.clone(),
            config.routes.clone(),
        );
        let routes = RouteTable::standard(&config.routes);

        tracing::debug!(base_url = %config.api.base_url, "Library client ready");

        Ok(Self {
            api: api::Api::new(http.clone()),
            config: Arc::new(config),
            session,
            http,
            auth,
            routes: Arc::new(routes),
        })
    }
}
