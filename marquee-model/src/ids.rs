use crate::error::ModelError;

/// Identifier of a movie in the catalogue.
///
/// Ids are assigned when the catalogue is loaded and are always positive.
/// Lookups accept raw integers so that absent, zero or negative input can be
/// answered with "not found" instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
pub struct MovieId(i64);

impl MovieId {
    pub fn new(id: i64) -> Result<Self, ModelError> {
        if id <= 0 {
            return Err(ModelError::InvalidId(id));
        }
        Ok(MovieId(id))
    }

    /// Id for the record at `index` (zero based) in load order.
    pub fn from_position(index: usize) -> Self {
        MovieId(index as i64 + 1)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for MovieId {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MovieId::new(value)
    }
}

impl From<MovieId> for i64 {
    fn from(id: MovieId) -> Self {
        id.0
    }
}

impl PartialEq<i64> for MovieId {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
