//! API integration tests

use axum::http::StatusCode;
use axum_test::TestServer;
use bookshelf_server::{api::create_router, config::AppConfig, AppState};
use serde_json::{json, Value};

/// Test server over a freshly seeded collection
fn create_test_server() -> TestServer {
    let app = create_router(AppState::new(AppConfig::default()));
    TestServer::new(app).expect("Failed to create test server")
}

/// Test server over an empty collection
fn create_empty_test_server() -> TestServer {
    let mut config = AppConfig::default();
    config.store.seed = false;
    TestServer::new(create_router(AppState::new(config))).expect("Failed to create test server")
}

fn dune() -> Value {
    json!({
        "title": "Dune",
        "author": "Frank Herbert",
        "description": "...",
        "rating": 4.9,
        "published_year": 1965
    })
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("Expected an array")
        .iter()
        .map(|book| book["id"].as_i64().expect("No book ID"))
        .collect()
}

async fn list(server: &TestServer) -> Value {
    server.get("/").await.json::<Value>()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 8);
}

#[tokio::test]
async fn test_list_books() {
    let server = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(ids(&body), (1..=8).collect::<Vec<_>>());
    assert_eq!(body[0]["title"], "To Kill a Mockingbird");
    assert_eq!(body[0]["author"], "Harper Lee");
}

#[tokio::test]
async fn test_get_book() {
    let server = create_test_server();

    let response = server.get("/books/6").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], 6);
    assert_eq!(body["title"], "The Hobbit");
    assert_eq!(body["rating"], 4.8);
    assert_eq!(body["published_year"], 2009);
}

#[tokio::test]
async fn test_get_book_not_found() {
    let server = create_test_server();

    let response = server.get("/books/99").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "NoSuchBook");
}

#[tokio::test]
async fn test_non_positive_path_id_rejected() {
    let server = create_test_server();

    let response = server.get("/books/0").await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = server.delete("/books/-3").await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = server.get("/books/abc").await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_book_path_treated_as_bad_id() {
    let server = create_test_server();

    let response = server.get("/books/update_book").await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["error"], "BadValue");

    let response = server.delete("/books/update_book").await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(ids(&list(&server).await).len(), 8);
}

#[tokio::test]
async fn test_filter_books() {
    let server = create_test_server();

    let response = server.get("/books/").add_query_param("rating", 4.8).await;
    response.assert_status_ok();
    assert_eq!(ids(&response.json()), [1, 6]);

    let response = server
        .get("/books/")
        .add_query_param("published_year", 2012)
        .await;
    assert_eq!(ids(&response.json()), [2, 4, 5, 8]);

    let response = server
        .get("/books/")
        .add_query_param("rating", 4.7)
        .add_query_param("published_year", 2020)
        .await;
    assert_eq!(ids(&response.json()), [7]);
}

#[tokio::test]
async fn test_filter_zero_rating_is_unfiltered() {
    let server = create_test_server();

    let all: Value = server.get("/books/").await.json();
    let response = server.get("/books/").add_query_param("rating", 0).await;

    response.assert_status_ok();
    let zero: Value = response.json();
    assert_eq!(zero, all);
    assert_eq!(ids(&zero).len(), 8);
}

#[tokio::test]
async fn test_filter_out_of_range_rejected() {
    let server = create_test_server();

    let response = server
        .get("/books/")
        .add_query_param("published_year", 1989)
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["error"], "BadValue");

    let response = server.get("/books/").add_query_param("rating", 5.5).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_filter_non_finite_rating_rejected() {
    let server = create_test_server();

    let response = server.get("/books/").add_query_param("rating", "NaN").await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["error"], "BadValue");

    let response = server.get("/books/").add_query_param("rating", "inf").await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_book() {
    let server = create_test_server();
    let mut request = dune();
    request["id"] = json!(500);

    let response = server.post("/create-book").json(&request).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["id"], 9);
    assert_eq!(body["title"], "Dune");

    assert_eq!(ids(&list(&server).await).last(), Some(&9));
}

#[tokio::test]
async fn test_create_on_empty_collection() {
    let server = create_empty_test_server();

    let response = server.post("/create-book").json(&dune()).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["id"], 1);
}

#[tokio::test]
async fn test_create_invalid_book_rejected() {
    let server = create_test_server();

    let mut short_title = dune();
    short_title["title"] = json!("Du");
    let response = server.post("/create-book").json(&short_title).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["error"], "BadValue");

    let mut empty_author = dune();
    empty_author["author"] = json!("");
    let response = server.post("/create-book").json(&empty_author).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let mut long_description = dune();
    long_description["description"] = json!("x".repeat(101));
    let response = server.post("/create-book").json(&long_description).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let mut missing_author = dune();
    missing_author
        .as_object_mut()
        .expect("Expected an object")
        .remove("author");
    let response = server.post("/create-book").json(&missing_author).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(ids(&list(&server).await).len(), 8);
}

#[tokio::test]
async fn test_update_book() {
    let server = create_test_server();
    let mut request = dune();
    request["id"] = json!(3);

    let response = server.put("/books/update_book").json(&request).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let book: Value = server.get("/books/3").await.json();
    assert_eq!(book["title"], "Dune");
    assert_eq!(book["author"], "Frank Herbert");
    assert_eq!(book["published_year"], 1965);
}

#[tokio::test]
async fn test_update_unknown_book() {
    let server = create_test_server();
    let before = list(&server).await;

    let mut request = dune();
    request["id"] = json!(42);
    let response = server.put("/books/update_book").json(&request).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server.put("/books/update_book").json(&dune()).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    assert_eq!(list(&server).await, before);
}

#[tokio::test]
async fn test_delete_book() {
    let server = create_test_server();

    let response = server.delete("/books/2").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    assert_eq!(ids(&list(&server).await), [1, 3, 4, 5, 6, 7, 8]);

    let response = server.delete("/books/2").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_delete_create_reuses_id() {
    let server = create_test_server();
    let original = list(&server).await;

    let created: Value = server.post("/create-book").json(&dune()).await.json();
    assert_eq!(created["id"], 9);

    let response = server.delete("/books/9").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    assert_eq!(list(&server).await, original);

    let again: Value = server.post("/create-book").json(&dune()).await.json();
    assert_eq!(again["id"], 9);
}
