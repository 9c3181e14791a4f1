//! Search criteria for the movie lookup service.
//!
//! A search takes up to three optional criteria (name, id, genre). Text
//! criteria are trimmed and count as absent when nothing is left. Supplied
//! criteria combine with AND semantics:
//!
//! - **name**: case-insensitive substring of the movie name
//! - **id**: exact id equality
//! - **genre**: case-insensitive *exact* genre match, so `Drama` does not
//!   match `Crime/Drama`
//!
//! [`SearchSummary`] renders a one-line description of a search and its
//! result count for display.

mod criteria;
mod summary;

pub use criteria::{SearchCriteria, TextCriterion};
pub use summary::SearchSummary;
