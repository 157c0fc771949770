//! Auth Middleware
//!
//! Session gate in front of protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::check_session::SessionGate;
use crate::error::AuthError;

/// Middleware that requires a valid access token
///
/// Runs before any extractor of the inner handler, so a rejected request
/// never has its body decoded. On success the `Session` is placed in the
/// request extensions.
pub async fn require_auth_session(
    State(gate): State<Arc<SessionGate>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = platform::header::extract_bearer_token(req.headers());

    let session = gate.authenticate(token.as_deref())?;

    tracing::debug!(user_id = %session.subject(), "Session accepted");

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
