//! # Marquee Core
//!
//! Core library for the Marquee movie catalogue.
//!
//! ## Overview
//!
//! The catalogue is loaded once from static JSON data and never changes
//! afterwards. Every query is answered from that snapshot:
//!
//! - [`catalog`]: the movie lookup service (list, lookup by id, distinct
//!   genres, multi-criteria search)
//! - [`search`]: search criteria normalization and result summaries
//! - [`loader`]: reading and validating the movie data file
//! - [`reviews`]: per-movie reviews and rating summaries
//! - [`icons`]: emoji icons picked from a movie name
//!
//! ## Examples
//!
//! ```no_run
//! use marquee_core::{catalog::MovieCatalog, search::SearchCriteria};
//!
//! # fn main() -> Result<(), marquee_core::CatalogError> {
//! let catalog = MovieCatalog::from_json_file("data/movies.json")?;
//! let criteria = SearchCriteria::new(Some("the"), None, Some("Crime/Drama"));
//! for movie in catalog.search(&criteria) {
//!     println!("{} ({})", movie.name, movie.year);
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// In-memory movie lookup service
pub mod catalog;

/// Error types produced while loading catalogue data
pub mod error;

/// Emoji icons for movie names
pub mod icons;

/// Movie data file parsing and validation
pub mod loader;

/// Review storage and rating summaries
pub mod reviews;

/// Search criteria and human-readable search summaries
pub mod search;

pub use catalog::MovieCatalog;
pub use error::{CatalogError, Result};
pub use marquee_model::{Movie, MovieId, Review};
pub use reviews::{ReviewStore, ReviewSummary};
pub use search::{SearchCriteria, SearchSummary};
