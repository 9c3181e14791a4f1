//! Askama templates and the view models they render.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use marquee_core::{Movie, Review, ReviewSummary, icons::movie_icon};

use crate::infra::errors::AppError;

/// One movie as shown in a list or on its detail page.
#[derive(Debug)]
pub struct MovieCard<'a> {
    pub movie: &'a Movie,
    pub icon: &'static str,
    pub rating_label: String,
}

impl<'a> MovieCard<'a> {
    pub fn new(movie: &'a Movie) -> Self {
        Self {
            movie,
            icon: movie_icon(&movie.name),
            rating_label: format!("{:.1}", movie.rating),
        }
    }
}

pub fn movie_cards<'a>(
    movies: impl IntoIterator<Item = &'a Movie>,
) -> Vec<MovieCard<'a>> {
    movies.into_iter().map(MovieCard::new).collect()
}

#[derive(Debug)]
pub struct GenreOption<'a> {
    pub name: &'a str,
    pub selected: bool,
}

/// Search form state, echoed back so a results page keeps the user's input.
#[derive(Debug, Default)]
pub struct SearchForm<'a> {
    pub name: &'a str,
    pub id: &'a str,
    pub genre_options: Vec<GenreOption<'a>>,
}

impl<'a> SearchForm<'a> {
    pub fn new(genres: &'a [String]) -> Self {
        Self::prefilled(genres, "", "", "")
    }

    pub fn prefilled(
        genres: &'a [String],
        name: &'a str,
        id: &'a str,
        genre: &'a str,
    ) -> Self {
        let genre = genre.trim();
        let genre_options = genres
            .iter()
            .map(|candidate| GenreOption {
                name: candidate.as_str(),
                selected: !genre.is_empty()
                    && candidate.eq_ignore_ascii_case(genre),
            })
            .collect();

        Self {
            name,
            id,
            genre_options,
        }
    }
}

#[derive(Debug)]
pub struct ReviewView<'a> {
    pub user_name: &'a str,
    pub avatar: &'a str,
    pub rating_label: String,
    pub comment: &'a str,
}

impl<'a> From<&'a Review> for ReviewView<'a> {
    fn from(review: &'a Review) -> Self {
        let avatar = if review.avatar_emoji.is_empty() {
            "👤"
        } else {
            review.avatar_emoji.as_str()
        };
        Self {
            user_name: &review.user_name,
            avatar,
            rating_label: format!("{:.1}", review.rating),
            comment: &review.comment,
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "movies.html")]
pub struct MoviesTemplate<'a> {
    pub movies: Vec<MovieCard<'a>>,
    pub genres: &'a [String],
    pub form: SearchForm<'a>,
    pub notice: Option<&'a str>,
}

#[derive(Debug, Template)]
#[template(path = "search_results.html")]
pub struct SearchResultsTemplate<'a> {
    pub summary: String,
    pub movies: Vec<MovieCard<'a>>,
    pub form: SearchForm<'a>,
}

#[derive(Debug, Template)]
#[template(path = "movie_details.html")]
pub struct MovieDetailsTemplate<'a> {
    pub card: MovieCard<'a>,
    pub tagline: String,
    pub reviews: Vec<ReviewView<'a>>,
    pub review_count: usize,
    pub average_label: Option<String>,
}

impl<'a> MovieDetailsTemplate<'a> {
    pub fn new(
        movie: &'a Movie,
        reviews: &'a [Review],
        summary: ReviewSummary,
    ) -> Self {
        Self {
            card: MovieCard::new(movie),
            tagline: movie.tagline(),
            reviews: reviews.iter().map(ReviewView::from).collect(),
            review_count: summary.count,
            average_label: summary
                .average_rating
                .map(|avg| format!("{avg:.1}")),
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub status: u16,
    pub reason: &'a str,
    pub message: &'a str,
}

/// Error for HTML routes: same taxonomy as [`AppError`], rendered as a page.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        Self(AppError::from(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let AppError { status, message } = self.0;
        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message: &message,
        };

        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render error page");
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

pub type PageResult = Result<Html<String>, PageError>;
