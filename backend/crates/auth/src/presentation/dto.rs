//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Create User
// ============================================================================

/// Create user request
///
/// Missing fields decode as empty so the entity rules report them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Public view of a user; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

// ============================================================================
// Generate Token
// ============================================================================

/// Credential exchange request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateTokenRequest {
    pub email: String,
    pub password: String,
}

/// Credential exchange response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTokenResponse {
    pub access_token: String,
}
