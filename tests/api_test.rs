//! Integration tests for API endpoints.
//!
//! Every test drives the full router against its own in-memory SQLite
//! database.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use starwars_api::{create_router, AppState, Config, Database};

// =============================================================================
// Helpers
// =============================================================================

async fn app() -> Router {
    let database = Database::connect(&Config::with_database_url("sqlite::memory:"))
        .await
        .expect("in-memory database should open");
    create_router(AppState::from_database(Arc::new(database)))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn seed_user(app: &Router) -> i64 {
    let (status, body) = call(
        app,
        "POST",
        "/users",
        Some(json!({"email": "a@b.com", "password": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["result"]["id"].as_i64().unwrap()
}

async fn seed(app: &Router, collection: &str, name: &str) -> i64 {
    let (status, body) = call(app, "POST", &format!("/{}", collection), Some(json!({"name": name}))).await;
    assert_eq!(status, StatusCode::OK);
    body["result"]["id"].as_i64().unwrap()
}

// =============================================================================
// Ambient endpoints
// =============================================================================

#[tokio::test]
async fn test_root_lists_endpoints() {
    let app = app().await;
    let (status, body) = call(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.contains(&json!("/films")));
    assert!(endpoints.contains(&json!("/users/{id}/favourites")));
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = app().await;
    let (status, body) = call(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app().await;
    let (status, body) = call(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Star Wars API");
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_user_crud() {
    let app = app().await;

    let (status, body) = call(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!([]));

    let id = seed_user(&app).await;
    assert_eq!(id, 1);

    let (status, body) = call(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["email"], "a@b.com");
    assert_eq!(body["result"]["is_active"], true);
    assert!(body["result"].get("password").is_none());

    let (status, body) = call(&app, "PATCH", "/users/1", Some(json!({"email": "c@d.com"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["email"], "c@d.com");

    let (status, body) = call(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user delete"]["email"], "c@d.com");

    let (status, body) = call(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_trailing_slash_reaches_the_same_route() {
    let app = app().await;
    seed_user(&app).await;

    let (status, body) = call(&app, "GET", "/users/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);

    let (status, body) = call(&app, "GET", "/users/1/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["id"], 1);
}

#[tokio::test]
async fn test_unparsable_id_is_a_json_bad_request() {
    let app = app().await;
    let (status, body) = call(&app, "GET", "/users/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = app().await;
    seed_user(&app).await;

    let (status, body) = call(
        &app,
        "POST",
        "/users",
        Some(json!({"email": "a@b.com", "password": "y"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn test_create_user_without_password_is_rejected() {
    let app = app().await;
    let (status, body) = call(&app, "POST", "/users", Some(json!({"email": "a@b.com"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_catalog_crud_for_every_collection() {
    let app = app().await;

    for (collection, singular, label) in [
        ("films", "film", "Film"),
        ("characters", "character", "Character"),
        ("planets", "planet", "Planet"),
        ("species", "species", "Species"),
    ] {
        let id = seed(&app, collection, "First").await;

        let (status, body) = call(&app, "GET", &format!("/{}/{}", collection, id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], json!({"id": id, "name": "First"}));

        let (status, body) = call(
            &app,
            "PUT",
            &format!("/{}/{}", collection, id),
            Some(json!({"name": "Renamed"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["name"], "Renamed");

        let (status, body) = call(&app, "GET", &format!("/{}", collection), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"].as_array().unwrap().len(), 1);

        let (status, body) = call(&app, "DELETE", &format!("/{}/{}", collection, id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[format!("{} delete", singular)]["name"], "Renamed");

        let (status, body) = call(&app, "GET", &format!("/{}/{}", collection, id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], format!("{} not found", label));
    }
}

#[tokio::test]
async fn test_duplicate_name_is_rejected() {
    let app = app().await;
    seed(&app, "planets", "Tatooine").await;

    let (status, body) = call(&app, "POST", "/planets", Some(json!({"name": "Tatooine"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Planet already exists");
}

#[tokio::test]
async fn test_missing_name_is_rejected() {
    let app = app().await;
    let (status, _) = call(&app, "POST", "/films", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_entry_is_not_found() {
    let app = app().await;
    let (status, _) = call(&app, "PUT", "/films/42", Some(json!({"name": "Nope"}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Favourites
// =============================================================================

#[tokio::test]
async fn test_favourite_film_scenario() {
    let app = app().await;
    assert_eq!(seed_user(&app).await, 1);
    assert_eq!(seed(&app, "films", "A New Hope").await, 1);

    let (status, body) = call(
        &app,
        "POST",
        "/users/1/favourites/films",
        Some(json!({"film_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["result"]["user_id"], 1);
    assert_eq!(body["result"]["film_id"], 1);
    assert_eq!(body["result"]["film"], json!({"id": 1, "name": "A New Hope"}));

    let (status, body) = call(
        &app,
        "POST",
        "/users/1/favourites/films",
        Some(json!({"film_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("already in favourites"));

    let (status, body) = call(&app, "DELETE", "/users/1/favourites/films/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!([]));

    let (status, body) = call(&app, "GET", "/users/1/favourites/films/1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("not in favourites"));
}

#[tokio::test]
async fn test_add_favourite_checks_user_then_target() {
    let app = app().await;

    let (status, body) = call(
        &app,
        "POST",
        "/users/9/favourites/planets",
        Some(json!({"planet_id": 9})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    seed_user(&app).await;
    let (status, body) = call(
        &app,
        "POST",
        "/users/1/favourites/planets",
        Some(json!({"planet_id": 9})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Planet not found");
}

#[tokio::test]
async fn test_non_positive_ids_are_missing_rows_not_bad_requests() {
    let app = app().await;

    let (status, body) = call(
        &app,
        "POST",
        "/users/9/favourites/films",
        Some(json!({"film_id": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    seed_user(&app).await;
    let (status, body) = call(
        &app,
        "POST",
        "/users/1/favourites/films",
        Some(json!({"film_id": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Film not found");
}

#[tokio::test]
async fn test_add_favourite_ignores_other_relation_fields() {
    let app = app().await;
    seed_user(&app).await;
    seed(&app, "films", "Empire Strikes Back").await;

    let (status, body) = call(
        &app,
        "POST",
        "/users/1/favourites/films",
        Some(json!({"film_id": 1, "planet_id": -5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["result"]["film_id"], 1);
}

#[tokio::test]
async fn test_add_favourite_requires_relation_field() {
    let app = app().await;
    seed_user(&app).await;

    let (status, body) = call(&app, "POST", "/users/1/favourites/species", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "specie_id is required");
}

#[tokio::test]
async fn test_empty_favourites_answer_not_found() {
    let app = app().await;
    seed_user(&app).await;

    let (status, _) = call(&app, "GET", "/users/1/favourites/characters", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "GET", "/users/1/favourites", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_favourite_summary_groups_by_kind() {
    let app = app().await;
    seed_user(&app).await;
    let planet = seed(&app, "planets", "Hoth").await;
    let species = seed(&app, "species", "Ewok").await;

    call(&app, "POST", "/users/1/favourites/planets", Some(json!({"planet_id": planet}))).await;
    call(&app, "POST", "/users/1/favourites/species", Some(json!({"specie_id": species}))).await;

    let (status, body) = call(&app, "GET", "/users/1/favourites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"]["films"], json!([]));
    assert_eq!(body["results"]["characters"], json!([]));
    assert_eq!(body["results"]["planets"], json!([{"id": planet, "name": "Hoth"}]));
    assert_eq!(body["results"]["species"], json!([{"id": species, "name": "Ewok"}]));

    let (status, body) = call(&app, "GET", "/users/1/favourites/planets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!([{"id": planet, "name": "Hoth"}]));
}

#[tokio::test]
async fn test_deleting_entity_removes_it_from_favourites() {
    let app = app().await;
    seed_user(&app).await;
    let character = seed(&app, "characters", "Yoda").await;

    let (status, _) = call(
        &app,
        "POST",
        "/users/1/favourites/characters",
        Some(json!({"character_id": character})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = call(&app, "DELETE", &format!("/characters/{}", character), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(&app, "GET", "/users/1/favourites/characters", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_relation_is_rejected() {
    let app = app().await;
    seed_user(&app).await;

    let (status, body) = call(&app, "GET", "/users/1/favourites/starships", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}
