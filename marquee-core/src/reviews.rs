use std::{collections::HashMap, path::Path};

use marquee_model::{MovieId, Review};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{catalog::MovieCatalog, error::Result, loader::read_json_file};

/// Count and mean rating of a movie's reviews.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub count: usize,
    pub average_rating: Option<f64>,
}

/// A review as stored in the data file. The movie id stays a raw integer so
/// one bad reference drops that review instead of failing the whole file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewRecord {
    movie_id: i64,
    user_name: String,
    #[serde(default)]
    avatar_emoji: String,
    rating: f64,
    comment: String,
}

/// Reviews grouped by movie, immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    by_movie: HashMap<MovieId, Vec<Review>>,
}

impl ReviewStore {
    /// A store with no reviews.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Group `reviews` by movie, dropping invalid reviews and reviews for
    /// movies the catalogue does not contain.
    pub fn new(reviews: Vec<Review>, catalog: &MovieCatalog) -> Self {
        let mut by_movie: HashMap<MovieId, Vec<Review>> = HashMap::new();
        for review in reviews {
            if let Err(err) = review.validate() {
                warn!(error = %err, "dropping invalid review");
                continue;
            }
            if catalog.get(Some(review.movie_id.get())).is_none() {
                warn!(
                    movie_id = %review.movie_id,
                    user = %review.user_name,
                    "dropping review for unknown movie"
                );
                continue;
            }
            by_movie.entry(review.movie_id).or_default().push(review);
        }
        Self { by_movie }
    }

    /// Load reviews from a JSON file. A missing file yields an empty store.
    pub fn from_json_file(
        path: impl AsRef<Path>,
        catalog: &MovieCatalog,
    ) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                path = %path.display(),
                "reviews file not found; serving without reviews"
            );
            return Ok(Self::empty());
        }

        let records: Vec<ReviewRecord> = read_json_file(path)?;
        let reviews = records
            .into_iter()
            .filter_map(|record| match MovieId::new(record.movie_id) {
                Ok(movie_id) => Some(Review {
                    movie_id,
                    user_name: record.user_name,
                    avatar_emoji: record.avatar_emoji,
                    rating: record.rating,
                    comment: record.comment,
                }),
                Err(err) => {
                    warn!(
                        error = %err,
                        "dropping review with invalid movie id"
                    );
                    None
                }
            })
            .collect();
        let store = Self::new(reviews, catalog);
        info!(
            path = %path.display(),
            reviews = store.len(),
            movies_reviewed = store.by_movie.len(),
            "reviews loaded"
        );
        Ok(store)
    }

    /// Total number of reviews kept.
    pub fn len(&self) -> usize {
        self.by_movie.values().map(Vec::len).sum()
    }

    /// True when no review was kept.
    pub fn is_empty(&self) -> bool {
        self.by_movie.is_empty()
    }

    /// Reviews for `movie_id` in file order.
    pub fn reviews_for(&self, movie_id: MovieId) -> &[Review] {
        self.by_movie
            .get(&movie_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Review count and mean rating for `movie_id`.
    pub fn summary_for(&self, movie_id: MovieId) -> ReviewSummary {
        let reviews = self.reviews_for(movie_id);
        let average_rating = if reviews.is_empty() {
            None
        } else {
            let total: f64 = reviews.iter().map(|review| review.rating).sum();
            Some(total / reviews.len() as f64)
        };

        ReviewSummary {
            count: reviews.len(),
            average_rating,
        }
    }
}
