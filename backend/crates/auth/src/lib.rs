//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Users, sessions, tokens, repository traits
//! - `application/` - Use cases, token issuer, session gate
//! - `infra/` - In-memory and PostgreSQL repositories
//! - `presentation/` - HTTP handlers, DTOs, router, gate middleware
//!
//! ## Features
//! - User creation with name, email and password
//! - Credential exchange for a signed, time-bound access token
//! - Session gate guarding other crates' routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id and a per-user random salt
//! - Access tokens are HS256 JWS; signatures compared in constant time
//! - Stateless sessions: no revocation, expiry checked on every request

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::check_session::SessionGate;
pub use application::config::{AuthConfig, ConfigError};
pub use domain::entity::session::Session;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::middleware::require_auth_session;
pub use presentation::router::users_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
