use std::path::PathBuf;

use marquee_core::{Movie, MovieCatalog, ReviewStore, SearchCriteria};

fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../data")
        .join(file)
}

fn catalog() -> MovieCatalog {
    MovieCatalog::from_json_file(data_path("movies.json"))
        .expect("shipped movie data should load")
}

fn names<'a>(movies: &[&'a Movie]) -> Vec<&'a str> {
    movies.iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn loads_all_twelve_movies() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 12);
    assert_eq!(
        catalog.get(Some(1)).map(|m| m.name.as_str()),
        Some("The Prison Escape")
    );
    assert!(catalog.get(Some(999)).is_none());
}

#[test]
fn blank_criteria_return_the_full_catalogue() {
    let catalog = catalog();
    assert_eq!(catalog.search_by(Some(""), None, None).len(), 12);
    assert_eq!(catalog.search_by(Some("   "), None, Some("   ")).len(), 12);
}

#[test]
fn id_search_finds_life_journey() {
    let catalog = catalog();
    assert_eq!(
        names(&catalog.search_by(None, Some(5), None)),
        vec!["Life Journey"]
    );
}

#[test]
fn name_and_genre_combine() {
    let catalog = catalog();
    let results = catalog.search_by(Some("the"), None, Some("Crime/Drama"));

    assert!(!results.is_empty());
    for movie in &results {
        assert!(movie.name.to_lowercase().contains("the"));
        assert_eq!(movie.genre.to_lowercase(), "crime/drama");
    }
}

#[test]
fn drama_excludes_compound_genres() {
    let catalog = catalog();
    let results = catalog.search(&SearchCriteria::by_genre("Drama"));

    assert_eq!(
        names(&results),
        vec!["The Prison Escape", "Life Journey", "The Underground Club"]
    );
}

#[test]
fn conflicting_criteria_match_nothing() {
    let catalog = catalog();
    assert!(catalog.search_by(Some("Family"), Some(1), None).is_empty());
    assert!(catalog.search_by(Some("NonExistentMovie"), None, None).is_empty());
}

#[test]
fn genre_list_has_no_duplicates() {
    let catalog = catalog();
    let genres = catalog.genres();

    for expected in ["Drama", "Crime/Drama", "Action/Crime"] {
        assert!(genres.iter().any(|g| g == expected), "missing {expected}");
    }

    let mut deduped = genres.to_vec();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), genres.len());
}

#[test]
fn shipped_reviews_reference_known_movies() {
    let catalog = catalog();
    let reviews =
        ReviewStore::from_json_file(data_path("reviews.json"), &catalog)
            .expect("shipped reviews should load");

    assert_eq!(reviews.len(), 12);
    let prison = catalog.get(Some(1)).unwrap();
    let summary = reviews.summary_for(prison.id);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.average_rating, Some(4.75));
}
