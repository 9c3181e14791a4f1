use std::{fmt, sync::Arc};

use marquee_core::{CatalogError, MovieCatalog, ReviewStore};

use crate::infra::config::Config;

/// Shared, read-only application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<MovieCatalog>,
    reviews: Arc<ReviewStore>,
    config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("movies", &self.catalog.len())
            .field("reviews", &self.reviews.len())
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        catalog: Arc<MovieCatalog>,
        reviews: Arc<ReviewStore>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            catalog,
            reviews,
            config,
        }
    }

    /// Load the catalogue and reviews named by `config`.
    pub fn load(config: Arc<Config>) -> Result<Self, CatalogError> {
        let catalog = MovieCatalog::from_json_file(&config.data.movies_path)?;
        let reviews =
            ReviewStore::from_json_file(&config.data.reviews_path, &catalog)?;
        Ok(Self::new(Arc::new(catalog), Arc::new(reviews), config))
    }

    pub fn catalog(&self) -> &MovieCatalog {
        self.catalog.as_ref()
    }

    pub fn reviews(&self) -> &ReviewStore {
        self.reviews.as_ref()
    }

    pub fn config(&self) -> &Config {
        self.config.as_ref()
    }
}
