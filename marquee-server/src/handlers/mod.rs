//! HTTP request handlers organized by surface

pub mod api;
pub mod pages;
pub mod params;

pub use params::{SearchParams, parse_movie_id};
