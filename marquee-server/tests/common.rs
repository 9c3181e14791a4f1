#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum_test::TestServer;
use marquee_core::{Movie, MovieCatalog, MovieId, Review, ReviewStore};
use marquee_server::{AppState, create_app, infra::config::Config};

fn movie(id: i64, name: &str, genre: &str, year: i32) -> Movie {
    Movie {
        id: MovieId::new(id).expect("fixture ids are positive"),
        name: name.to_string(),
        director: "Fixture Director".to_string(),
        year,
        genre: genre.to_string(),
        synopsis: format!("Synopsis of {name}."),
        runtime_minutes: 120,
        rating: 4.5,
    }
}

pub fn fixture_movies() -> Vec<Movie> {
    vec![
        movie(1, "The Prison Escape", "Drama", 1994),
        movie(2, "The Family Boss", "Crime/Drama", 1972),
        movie(3, "The Masked Hero", "Action/Crime", 2008),
        movie(5, "Life Journey", "Drama", 1994),
    ]
}

pub fn fixture_reviews() -> Vec<Review> {
    vec![
        Review {
            movie_id: MovieId::new(1).expect("positive"),
            user_name: "MovieFan".to_string(),
            avatar_emoji: "🎭".to_string(),
            rating: 5.0,
            comment: "A true classic.".to_string(),
        },
        Review {
            movie_id: MovieId::new(1).expect("positive"),
            user_name: "CinemaLover".to_string(),
            avatar_emoji: "🍿".to_string(),
            rating: 4.0,
            comment: "Slow start, great ending.".to_string(),
        },
    ]
}

pub fn fixture_state() -> Result<AppState> {
    let catalog = MovieCatalog::new(fixture_movies())?;
    let reviews = ReviewStore::new(fixture_reviews(), &catalog);
    Ok(AppState::new(
        Arc::new(catalog),
        Arc::new(reviews),
        Arc::new(Config::default()),
    ))
}

pub fn test_server() -> Result<TestServer> {
    let app = create_app(fixture_state()?);
    Ok(TestServer::new(app)?)
}
