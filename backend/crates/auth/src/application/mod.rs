//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod issue_token;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use check_session::SessionGate;
pub use config::{AuthConfig, ConfigError};
pub use issue_token::{IssuedToken, TokenIssuer};
pub use sign_in::{GenerateTokenInput, GenerateTokenOutput, GenerateTokenUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
