//! Data model types.

pub mod repos;
pub mod response;

// Re-exports
pub use repos::{License, Repository};
pub use response::JsonResponse;
