use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use marquee_core::{Movie, Review, ReviewSummary};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::{
    handlers::{SearchParams, parse_movie_id},
    infra::{
        app_state::AppState,
        errors::{AppError, AppResult},
    },
};

pub const SEARCH_OK_MESSAGE: &str = "Search completed successfully";
pub const MISSING_CRITERIA_MESSAGE: &str =
    "At least one search parameter (name, id, or genre) must be provided";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailsResponse<'a> {
    pub movie: &'a Movie,
    pub reviews: &'a [Review],
    pub review_summary: ReviewSummary,
}

/// Raw criteria echoed back to the client; absent values become `""`.
#[derive(Debug, Serialize)]
pub struct EchoedCriteria<'a> {
    pub name: &'a str,
    pub id: &'a str,
    pub genre: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<'a> {
    pub success: bool,
    pub message: &'static str,
    pub results: Vec<&'a Movie>,
    pub total_results: usize,
    pub search_criteria: EchoedCriteria<'a>,
}

pub async fn list_movies(State(state): State<AppState>) -> Response {
    Json(state.catalog().all()).into_response()
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let id = parse_movie_id(&raw_id)?;
    let movie = state.catalog().get(Some(id)).ok_or_else(|| {
        AppError::not_found(format!("Movie with id {id} was not found"))
    })?;

    let reviews = state.reviews();
    let body = MovieDetailsResponse {
        movie,
        reviews: reviews.reviews_for(movie.id),
        review_summary: reviews.summary_for(movie.id),
    };
    Ok(Json(body).into_response())
}

pub async fn list_genres(State(state): State<AppState>) -> Response {
    Json(state.catalog().genres()).into_response()
}

pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Response> {
    let criteria = params.criteria()?;
    if criteria.is_empty() {
        debug!("api search without criteria");
        let body = json!({
            "success": false,
            "message": MISSING_CRITERIA_MESSAGE,
            "results": [],
        });
        return Ok((StatusCode::BAD_REQUEST, Json(body)).into_response());
    }

    let results = state.catalog().search(&criteria);
    let body = SearchResponse {
        success: true,
        message: SEARCH_OK_MESSAGE,
        total_results: results.len(),
        results,
        search_criteria: EchoedCriteria {
            name: params.name.as_deref().unwrap_or_default(),
            id: params.id.as_deref().unwrap_or_default(),
            genre: params.genre.as_deref().unwrap_or_default(),
        },
    };
    Ok(Json(body).into_response())
}

pub async fn health(
    State(state): State<AppState>,
) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "movies": state.catalog().len(),
    }))
}
