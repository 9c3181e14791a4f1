//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod movie;
pub mod review;

// Intentionally curated re-exports for downstream consumers.
pub use error::ModelError;
pub use ids::MovieId;
pub use movie::Movie;
pub use review::Review;
