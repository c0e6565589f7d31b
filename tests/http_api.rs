//! End-to-end HTTP tests: the full router over a fresh in-memory store,
//! driven request-by-request without a network socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use cinegraph::graph::MemoryGraphStore;
use cinegraph::rest_api::router;

fn app() -> Router {
    router(Arc::new(MemoryGraphStore::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn parse(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

async fn create_movie(app: &Router, title: &str, rating: f64) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/movie",
        Some(json!({"movie": {"title": title, "imdbRating": rating}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    parse(&body)
}

#[tokio::test]
async fn test_create_movie_returns_generated_id() {
    let app = app();

    let movie = create_movie(&app, "Inception", 8.8).await;

    assert_eq!(movie["title"], "Inception");
    assert_eq!(movie["imdbRating"], 8.8);
    assert!(movie["movieId"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_find_movies_without_params_returns_all() {
    let app = app();
    create_movie(&app, "Inception", 8.8).await;
    create_movie(&app, "Heat", 8.3).await;

    let (status, body) = send(&app, "GET", "/movie", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body).as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_is_case_insensitive_with_limit() {
    let app = app();
    create_movie(&app, "Inception", 8.8).await;
    create_movie(&app, "Interstellar", 8.7).await;

    let (status, body) = send(&app, "GET", "/movie?search=incep&limit=1", None).await;

    assert_eq!(status, StatusCode::OK);
    let movies = parse(&body);
    let movies = movies.as_array().unwrap();
    assert!(movies.len() <= 1);
    assert_eq!(movies[0]["title"], "Inception");
}

#[tokio::test]
async fn test_sort_skip_limit_pagination() {
    let app = app();
    create_movie(&app, "Heat", 8.3).await;
    create_movie(&app, "Inception", 8.8).await;
    create_movie(&app, "Alien", 8.5).await;

    let (status, body) = send(&app, "GET", "/movie?sort=title_ASC&skip=1&limit=1", None).await;

    assert_eq!(status, StatusCode::OK);
    let movies = parse(&body);
    let movies = movies.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Heat");
}

#[tokio::test]
async fn test_unparsable_limit_is_uniform_500() {
    let app = app();

    let (status, body) = send(&app, "GET", "/movie?limit=abc", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = parse(&body);
    assert_eq!(error["status"], "error");
    assert!(error["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_round_trip_create_then_search_by_title() {
    let app = app();
    let created = create_movie(&app, "The Matrix", 8.7).await;

    let (status, body) = send(&app, "GET", "/movie?search=matrix", None).await;

    assert_eq!(status, StatusCode::OK);
    let movies = parse(&body);
    let found = &movies.as_array().unwrap()[0];
    assert_eq!(found["title"], "The Matrix");
    assert_eq!(found["imdbRating"], 8.7);
    assert_eq!(found["movieId"], created["movieId"]);
}

#[tokio::test]
async fn test_update_movie_by_id() {
    let app = app();
    let created = create_movie(&app, "Inception", 8.8).await;
    let id = created["movieId"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/movie/{}", id),
        Some(json!({"movie": {"imdbRating": 9.0}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated = parse(&body);
    assert_eq!(updated["imdbRating"], 9.0);
    assert_eq!(updated["title"], "Inception");
}

#[tokio::test]
async fn test_update_missing_movie_is_404_empty_body() {
    let app = app();

    let (status, body) = send(
        &app,
        "PUT",
        "/movie/no-such-id",
        Some(json!({"movie": {"title": "X"}})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_delete_movie_is_idempotent() {
    let app = app();
    let created = create_movie(&app, "Inception", 8.8).await;
    let id = created["movieId"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "DELETE", &format!("/movie/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, body) = send(&app, "DELETE", &format!("/movie/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_genre_create_find_update_delete() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/genre",
        Some(json!({"genre": {"name": "thriller"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["name"], "thriller");

    let (status, body) = send(&app, "GET", "/genre?search=THRILL", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body).as_array().unwrap().len(), 1);

    // Genres are keyed by name, for update and delete alike
    let (status, body) = send(
        &app,
        "PUT",
        "/genre/thriller",
        Some(json!({"genre": {"name": "noir"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["name"], "noir");

    let (status, body) = send(&app, "DELETE", "/genre/noir", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_delete_unknown_genre_is_404_empty_body() {
    let app = app();

    let (status, body) = send(&app, "DELETE", "/genre/unknown-name", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_missing_payload_field_is_uniform_500() {
    let app = app();

    let (status, body) = send(&app, "POST", "/movie", Some(json!({}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = parse(&body);
    assert_eq!(error["status"], "error");
    assert!(error["error"].as_str().unwrap().contains("movie"));
}

#[tokio::test]
async fn test_search_with_regex_metacharacters_matches_literally() {
    let app = app();
    create_movie(&app, "M.A.S.H", 7.4).await;
    create_movie(&app, "MASH", 7.0).await;

    let (status, body) = send(&app, "GET", "/movie?search=M.A", None).await;

    assert_eq!(status, StatusCode::OK);
    let movies = parse(&body);
    let movies = movies.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "M.A.S.H");
}
