//! The movie lookup service.
//!
//! [`MovieCatalog`] owns an immutable, ordered snapshot of the movie
//! collection. It is built once at startup and shared read-only (typically
//! behind an `Arc`), so queries need no locking. Every query is total: bad
//! input yields `None` or an empty list, never an error.

use std::{collections::HashSet, path::Path};

use marquee_model::{Movie, MovieId};
use tracing::{debug, info};

use crate::{
    error::{CatalogError, Result},
    loader,
    search::SearchCriteria,
};

/// Ordered, immutable movie collection with its distinct genres.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
    genres: Vec<String>,
}

impl MovieCatalog {
    /// Build a catalogue from movies that already carry ids.
    ///
    /// Load order is preserved. Fails on a duplicate id; non-positive ids
    /// cannot be constructed in the first place.
    pub fn new(movies: Vec<Movie>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(movie.id) {
                return Err(CatalogError::DuplicateId(movie.id));
            }
        }

        let genres = distinct_genres(&movies);
        Ok(Self { movies, genres })
    }

    /// Read the JSON data file at `path`, assigning ids in file order.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let movies = loader::load_movies(path)?;
        let catalog = Self::new(movies)?;
        info!(
            path = %path.display(),
            movies = catalog.len(),
            genres = catalog.genres.len(),
            "movie catalogue loaded"
        );
        Ok(catalog)
    }

    /// Number of movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// True when the catalogue holds no movies.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Every movie, in load order.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie by id. Absent, zero, negative and unknown ids all
    /// resolve to `None`.
    pub fn get(&self, id: Option<i64>) -> Option<&Movie> {
        let id = MovieId::new(id?).ok()?;
        self.movies.iter().find(|movie| movie.id == id)
    }

    /// Distinct genres in first-seen order.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Movies satisfying every supplied criterion, in load order.
    ///
    /// Empty criteria return the whole collection.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Movie> {
        if criteria.is_empty() {
            return self.movies.iter().collect();
        }

        let results: Vec<&Movie> = self
            .movies
            .iter()
            .filter(|movie| criteria.matches(movie))
            .collect();

        debug!(
            name = criteria.name(),
            id = criteria.id(),
            genre = criteria.genre(),
            matches = results.len(),
            "catalogue search evaluated"
        );
        results
    }

    /// Convenience wrapper over [`MovieCatalog::search`] taking raw inputs.
    pub fn search_by(
        &self,
        name: Option<&str>,
        id: Option<i64>,
        genre: Option<&str>,
    ) -> Vec<&Movie> {
        self.search(&SearchCriteria::new(name, id, genre))
    }
}

fn distinct_genres(movies: &[Movie]) -> Vec<String> {
    let mut seen = HashSet::new();
    movies
        .iter()
        .filter(|movie| seen.insert(movie.genre.as_str()))
        .map(|movie| movie.genre.clone())
        .collect()
}
