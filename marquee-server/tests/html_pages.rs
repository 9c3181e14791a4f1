use anyhow::Result;
use axum::http::StatusCode;

mod common;
use common::test_server;

#[tokio::test]
async fn root_redirects_to_movie_list() -> Result<()> {
    let server = test_server()?;

    let response = server.get("/").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/movies");
    Ok(())
}

#[tokio::test]
async fn movie_list_shows_every_movie_and_genre() -> Result<()> {
    let server = test_server()?;

    let response = server.get("/movies").await;
    response.assert_status_ok();
    let html = response.text();
    let names = [
        "The Prison Escape",
        "The Family Boss",
        "The Masked Hero",
        "Life Journey",
    ];
    for name in names {
        assert!(html.contains(name), "missing {name}");
    }
    assert!(html.contains("<span>Drama</span>"));
    assert!(!html.contains("Please provide at least one search criterion"));
    Ok(())
}

#[tokio::test]
async fn empty_search_shows_notice_on_movie_list() -> Result<()> {
    let server = test_server()?;

    let response = server.get("/movies/search?name=&id=&genre=").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(
        "Please provide at least one search criterion (name, id, or genre)."
    ));
    assert!(html.contains("Life Journey"));
    Ok(())
}

#[tokio::test]
async fn whitespace_only_search_shows_notice() -> Result<()> {
    let server = test_server()?;

    let response = server.get("/movies/search?name=%20%20&genre=%20").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(
        "Please provide at least one search criterion (name, id, or genre)."
    ));
    assert!(!html.contains("Search results"));
    assert!(html.contains("The Family Boss"));
    Ok(())
}

#[tokio::test]
async fn search_results_page_summarizes_the_search() -> Result<()> {
    let server = test_server()?;

    let response = server
        .get("/movies/search")
        .add_query_param("name", "Prison")
        .add_query_param("id", "1")
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("The Prison Escape"));
    assert!(html.contains("with name containing"));
    assert!(html.contains("Found 1 movie."));
    assert!(html.contains(r#"value="Prison""#));
    Ok(())
}

#[tokio::test]
async fn search_without_matches_says_so() -> Result<()> {
    let server = test_server()?;

    let response = server
        .get("/movies/search")
        .add_query_param("genre", "Western")
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("No movies found matching your search criteria."));
    assert!(html.contains("Found 0 movies."));
    Ok(())
}

#[tokio::test]
async fn bad_id_renders_error_page() -> Result<()> {
    let server = test_server()?;

    let response = server
        .get("/movies/search")
        .add_query_param("id", "five")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("400 Bad Request"));
    Ok(())
}

#[tokio::test]
async fn details_page_shows_reviews() -> Result<()> {
    let server = test_server()?;

    let response = server.get("/movies/1/details").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("The Prison Escape"));
    assert!(html.contains("1994 · 120 min"));
    assert!(html.contains("MovieFan"));
    assert!(html.contains("Reviews (2)"));
    assert!(html.contains("Average rating: 4.5 / 5"));
    Ok(())
}

#[tokio::test]
async fn non_numeric_details_id_renders_error_page() -> Result<()> {
    let server = test_server()?;

    let response = server.get("/movies/abc/details").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let html = response.text();
    assert!(html.contains("400 Bad Request"));
    assert!(html.contains("expected a whole number"));
    Ok(())
}

#[tokio::test]
async fn unknown_movie_details_is_not_found() -> Result<()> {
    let server = test_server()?;

    let response = server.get("/movies/42/details").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let html = response.text();
    assert!(html.contains("404 Not Found"));
    assert!(html.contains("Movie with id 42 was not found"));
    Ok(())
}
