//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Secure randomness
//! - Password hashing (Argon2id)
//! - HTTP header helpers (bearer tokens)

pub mod crypto;
pub mod header;
pub mod password;
