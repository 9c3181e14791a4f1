use marquee_core::SearchCriteria;
use serde::Deserialize;

use crate::infra::errors::{AppError, AppResult};

/// Query string of both search endpoints.
///
/// `id` stays textual because HTML forms submit `id=` for an empty field;
/// a blank id means "not supplied" rather than a parse failure.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub id: Option<String>,
    pub genre: Option<String>,
}

/// Parse a movie id taken from a path segment or query value.
pub fn parse_movie_id(raw: &str) -> AppResult<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(format!(
            "Invalid movie id '{raw}': expected a whole number"
        ))
    })
}

impl SearchParams {
    pub fn parsed_id(&self) -> AppResult<Option<i64>> {
        match self.id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse_movie_id(raw).map(Some),
        }
    }

    pub fn criteria(&self) -> AppResult<SearchCriteria> {
        Ok(SearchCriteria::new(
            self.name.as_deref(),
            self.parsed_id()?,
            self.genre.as_deref(),
        ))
    }
}
