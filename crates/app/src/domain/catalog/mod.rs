//! Catalog

pub mod errors;
pub mod records;
pub mod service;
mod tree;

pub use errors::CatalogServiceError;
pub use service::*;
pub use tree::build_category_tree;
