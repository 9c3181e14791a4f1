use crate::ids::MovieId;

/// A single catalogue entry.
///
/// Field names on the wire follow the data file: `movieName`, `description`,
/// `duration` and `imdbRating` carry the name, synopsis, runtime in minutes
/// and rating respectively.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Movie {
    pub id: MovieId,
    #[cfg_attr(feature = "serde", serde(rename = "movieName"))]
    pub name: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    #[cfg_attr(feature = "serde", serde(rename = "description"))]
    pub synopsis: String,
    #[cfg_attr(feature = "serde", serde(rename = "duration"))]
    pub runtime_minutes: u32,
    #[cfg_attr(feature = "serde", serde(rename = "imdbRating"))]
    pub rating: f64,
}

impl Movie {
    /// Release year and runtime, e.g. `1994 · 142 min`.
    pub fn tagline(&self) -> String {
        format!("{} · {} min", self.year, self.runtime_minutes)
    }
}
