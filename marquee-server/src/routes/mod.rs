use axum::{Router, routing::get};

use crate::{
    handlers::{api, pages},
    infra::app_state::AppState,
};

/// HTML pages served to browsers
pub fn create_page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::root_redirect))
        .route("/movies", get(pages::list_movies_page))
        .route("/movies/search", get(pages::search_page))
        .route("/movies/{id}/details", get(pages::movie_details_page))
}

/// JSON API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(api::list_movies))
        .route("/movies/search", get(api::search_movies))
        .route("/movies/{id}", get(api::get_movie))
        .route("/genres", get(api::list_genres))
}
