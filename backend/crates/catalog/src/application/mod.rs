//! Application Layer
//!
//! Use cases and application services.

pub mod service;

pub use service::{ProductInput, ProductService};
