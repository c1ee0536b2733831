use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use movielog::{AppState, config::Config, db, models::NewMovie, router};

const SECRET: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

async fn test_state() -> Arc<AppState> {
    let config = Arc::new(Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        // Empty credentials put the TMDB client in mock mode.
        tmdb_api_key: String::new(),
        tmdb_access_token: String::new(),
        tmdb_base_url: "https://api.themoviedb.org/3".to_string(),
        secret_key: SECRET.to_string(),
        database_url: "sqlite::memory:".to_string(),
        tmdb_rps: 4,
    });

    let mut opts = sea_orm::ConnectOptions::new(config.database_url.clone());
    opts.max_connections(1);
    let db = sea_orm::Database::connect(opts).await.unwrap();
    db::migrate(&db).await.unwrap();

    Arc::new(AppState::new(config, db, reqwest::Client::new()))
}

fn server(state: Arc<AppState>) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

fn sample_movie(title: &str) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        year: Some(1999),
        description: "A movie.".to_string(),
        img_url: None,
    }
}

#[tokio::test]
async fn list_view_assigns_descending_ranks_by_rating() {
    let state = test_state().await;
    let server = server(state.clone());

    let a = state.store.create(sample_movie("A")).await.unwrap();
    let b = state.store.create(sample_movie("B")).await.unwrap();
    state
        .store
        .set_rating_review(a.id, movielog::models::EditInput { rating: Some(7.0), review: None })
        .await
        .unwrap();
    state
        .store
        .set_rating_review(b.id, movielog::models::EditInput { rating: Some(9.0), review: None })
        .await
        .unwrap();

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("#1"));

    let a = state.store.get(a.id).await.unwrap().unwrap();
    let b = state.store.get(b.id).await.unwrap().unwrap();
    assert_eq!(a.ranking, Some(2));
    assert_eq!(b.ranking, Some(1));
}

#[tokio::test]
async fn list_view_reassigns_ranks_after_rating_change() {
    let state = test_state().await;
    let server = server(state.clone());

    let a = state.store.create(sample_movie("A")).await.unwrap();
    let b = state.store.create(sample_movie("B")).await.unwrap();
    state
        .store
        .set_rating_review(a.id, movielog::models::EditInput { rating: Some(9.0), review: None })
        .await
        .unwrap();
    state
        .store
        .set_rating_review(b.id, movielog::models::EditInput { rating: Some(7.0), review: None })
        .await
        .unwrap();

    server.get("/").await.assert_status_ok();
    assert_eq!(state.store.get(a.id).await.unwrap().unwrap().ranking, Some(1));

    // Flip the ratings; the next list view must overwrite the old ranks.
    state
        .store
        .set_rating_review(a.id, movielog::models::EditInput { rating: Some(5.0), review: None })
        .await
        .unwrap();
    server.get("/").await.assert_status_ok();

    assert_eq!(state.store.get(a.id).await.unwrap().unwrap().ranking, Some(2));
    assert_eq!(state.store.get(b.id).await.unwrap().unwrap().ranking, Some(1));
}

#[tokio::test]
async fn edit_persists_submitted_values_and_nothing_else() {
    let state = test_state().await;
    let server = server(state.clone());

    let movie = state.store.create(sample_movie("Fight Club")).await.unwrap();

    let response = server
        .post("/update")
        .add_query_param("id", movie.id)
        .form(&[("rating", "8.5"), ("review", "Great")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    let updated = state.store.get(movie.id).await.unwrap().unwrap();
    assert_eq!(updated.rating, Some(8.5));
    assert_eq!(updated.review.as_deref(), Some("Great"));
    assert_eq!(updated.title, "Fight Club");
    assert_eq!(updated.year, Some(1999));
    assert_eq!(updated.description, "A movie.");
}

#[tokio::test]
async fn edit_rejects_invalid_rating() {
    let state = test_state().await;
    let server = server(state.clone());

    let movie = state.store.create(sample_movie("Fight Club")).await.unwrap();

    let response = server
        .post("/update")
        .add_query_param("id", movie.id)
        .form(&[("rating", "eleven"), ("review", "")])
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let unchanged = state.store.get(movie.id).await.unwrap().unwrap();
    assert_eq!(unchanged.rating, None);
}

#[tokio::test]
async fn edit_of_missing_movie_is_not_found() {
    let state = test_state().await;
    let server = server(state);

    let response = server.get("/update").add_query_param("id", 99).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_movie() {
    let state = test_state().await;
    let server = server(state.clone());

    let movie = state.store.create(sample_movie("Fight Club")).await.unwrap();

    let response = server.get("/delete").add_query_param("id", movie.id).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    assert!(state.store.get(movie.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_of_missing_movie_is_not_found() {
    let state = test_state().await;
    let server = server(state.clone());

    let response = server.get("/delete").add_query_param("id", 5).await;
    response.assert_status(StatusCode::NOT_FOUND);

    assert!(state.store.list_ranked().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_search_renders_candidate_list() {
    let state = test_state().await;
    let server = server(state);

    let response = server.post("/add").form(&[("title", "Fight")]).await;
    response.assert_status_ok();
    assert!(response.text().contains("Fight Club"));
}

#[tokio::test]
async fn find_creates_movie_from_first_result_and_redirects_to_edit() {
    let state = test_state().await;
    let server = server(state.clone());

    let response = server
        .get("/find")
        .add_query_param("id", 550)
        .add_query_param("title", "Fight Club")
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    let location = response.header("location");
    let location = location.to_str().unwrap();
    let id: i32 = location.strip_prefix("/update?id=").unwrap().parse().unwrap();

    let created = state.store.get(id).await.unwrap().unwrap();
    assert_eq!(created.title, "Fight Club");
    assert_eq!(created.year, Some(1999));
    assert_eq!(
        created.img_url.as_deref(),
        Some("https://image.tmdb.org/t/p/w500/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg")
    );
    assert!(!created.description.is_empty());
    assert_eq!(created.rating, None);
    assert_eq!(created.review, None);
}

#[tokio::test]
async fn find_with_no_results_renders_no_match_page() {
    let state = test_state().await;
    let server = server(state.clone());

    let response = server
        .get("/find")
        .add_query_param("id", 1)
        .add_query_param("title", "no such film")
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("No matching movie"));

    assert!(state.store.list_ranked().await.unwrap().is_empty());
}
