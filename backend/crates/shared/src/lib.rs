//! Shared Kernel
//!
//! Vocabulary shared by every storefront crate:
//! - Unified HTTP-mapped error type and result alias
//! - Typed UUID identifiers that round-trip through their string form
//!
//! Anything in here must mean the same thing for users and products alike.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
