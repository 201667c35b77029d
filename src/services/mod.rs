//! Stateful services: session handling and authentication

pub mod auth;
pub mod session;

pub use auth::{AuthService, LoginOutcome, TokenDecoder};
pub use session::{FileStorage, MemoryStorage, Session, SessionStorage, SessionStore};
