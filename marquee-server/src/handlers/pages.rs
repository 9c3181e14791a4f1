use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use marquee_core::SearchSummary;
use tracing::debug;

use crate::{
    handlers::{SearchParams, parse_movie_id},
    infra::{app_state::AppState, errors::AppError},
    views::{
        MovieDetailsTemplate, MoviesTemplate, PageResult, SearchForm,
        SearchResultsTemplate, movie_cards,
    },
};

pub const MISSING_CRITERIA_NOTICE: &str =
    "Please provide at least one search criterion (name, id, or genre).";

pub async fn root_redirect() -> Redirect {
    Redirect::to("/movies")
}

pub async fn list_movies_page(State(state): State<AppState>) -> PageResult {
    render_movies_page(&state, None)
}

fn render_movies_page(state: &AppState, notice: Option<&str>) -> PageResult {
    let catalog = state.catalog();
    let page = MoviesTemplate {
        movies: movie_cards(catalog.all()),
        genres: catalog.genres(),
        form: SearchForm::new(catalog.genres()),
        notice,
    };
    Ok(Html(page.render()?))
}

pub async fn movie_details_page(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> PageResult {
    let id = parse_movie_id(&raw_id)?;
    let movie = state.catalog().get(Some(id)).ok_or_else(|| {
        AppError::not_found(format!("Movie with id {id} was not found"))
    })?;

    let reviews = state.reviews();
    let page = MovieDetailsTemplate::new(
        movie,
        reviews.reviews_for(movie.id),
        reviews.summary_for(movie.id),
    );
    Ok(Html(page.render()?))
}

/// HTML search. Without any supplied criterion the full list is shown again
/// with a notice instead of an error page.
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> PageResult {
    let criteria = params.criteria()?;
    if criteria.is_empty() {
        debug!("html search without criteria");
        return render_movies_page(&state, Some(MISSING_CRITERIA_NOTICE));
    }

    let catalog = state.catalog();
    let results = catalog.search(&criteria);
    let summary = SearchSummary::new(&criteria, results.len()).to_string();
    let page = SearchResultsTemplate {
        summary,
        movies: movie_cards(results),
        form: SearchForm::prefilled(
            catalog.genres(),
            params.name.as_deref().unwrap_or_default(),
            params.id.as_deref().unwrap_or_default(),
            params.genre.as_deref().unwrap_or_default(),
        ),
    };
    Ok(Html(page.render()?))
}
