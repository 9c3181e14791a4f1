//! Movie data file parsing.
//!
//! The data file is a JSON array of movie records in display order. Any `id`
//! present in the file is ignored: ids are assigned here, sequentially from 1
//! in file order, so they are unique by construction.

use std::{fs, path::Path};

use marquee_model::{Movie, MovieId};
use serde::{Deserialize, de::DeserializeOwned};

use crate::error::{CatalogError, Result};

/// A movie as stored in the data file, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    #[serde(rename = "movieName")]
    pub name: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    #[serde(rename = "description", default)]
    pub synopsis: String,
    #[serde(rename = "duration")]
    pub runtime_minutes: u32,
    #[serde(rename = "imdbRating")]
    pub rating: f64,
}

impl MovieRecord {
    fn validate(&self, index: usize) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidRecord {
                index,
                reason: "movie name is blank".to_string(),
            });
        }
        if !self.rating.is_finite() || self.rating < 0.0 {
            return Err(CatalogError::InvalidRecord {
                index,
                reason: format!(
                    "rating {} is not a non-negative number",
                    self.rating
                ),
            });
        }
        Ok(())
    }

    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            name: self.name,
            director: self.director,
            year: self.year,
            genre: self.genre,
            synopsis: self.synopsis,
            runtime_minutes: self.runtime_minutes,
            rating: self.rating,
        }
    }
}

/// Validate records and assign ids in load order.
pub fn assign_ids(records: Vec<MovieRecord>) -> Result<Vec<Movie>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record.validate(index)?;
            Ok(record.into_movie(MovieId::from_position(index)))
        })
        .collect()
}

/// Parse movie records from a JSON string. `origin` is only used in errors.
pub fn parse_movies(raw: &str, origin: &Path) -> Result<Vec<Movie>> {
    let records: Vec<MovieRecord> =
        serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
    assign_ids(records)
}

/// Read and validate the movie data file.
pub fn load_movies(path: &Path) -> Result<Vec<Movie>> {
    let raw = read_to_string(path)?;
    parse_movies(&raw, path)
}

pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
