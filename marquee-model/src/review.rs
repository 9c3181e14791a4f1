use crate::{error::ModelError, ids::MovieId};

/// A user review attached to a single movie.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Review {
    pub movie_id: MovieId,
    pub user_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub avatar_emoji: String,
    pub rating: f64,
    pub comment: String,
}

impl Review {
    pub const MAX_RATING: f64 = 5.0;

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.user_name.trim().is_empty() {
            return Err(ModelError::InvalidReview(format!(
                "review for movie {} has no reviewer name",
                self.movie_id
            )));
        }
        if !self.rating.is_finite()
            || !(0.0..=Self::MAX_RATING).contains(&self.rating)
        {
            return Err(ModelError::InvalidReview(format!(
                "rating {} for movie {} is outside 0-{}",
                self.rating,
                self.movie_id,
                Self::MAX_RATING
            )));
        }
        Ok(())
    }
}
