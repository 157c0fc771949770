//! Value Object Module

pub mod list_query;
pub mod product_id;
