//! Value Object Module

pub mod access_token;
pub mod signing_key;
pub mod user_id;
pub mod user_password;
