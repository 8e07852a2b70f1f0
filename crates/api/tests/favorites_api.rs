//! HTTP-level integration tests for the `/api/v1/favorites` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router,
//! backed by the in-memory store so no database is required.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// POST a game and return its assigned id.
async fn create(app: &Router, body: serde_json::Value) -> i64 {
    let response = post_json(app.clone(), "/api/v1/favorites", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

fn names(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|g| g["name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_returns_201_with_assigned_fields() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/favorites",
        json!({
            "name": "Chrono Trigger",
            "image_url": "https://example.com/ct.jpg",
            "platform": "SNES",
            "release_year": 1995,
            "external_ref_id": 4100,
            "description": "Time travel RPG"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["id"].is_number());
    assert!(json["data"]["added_at"].is_string());
    assert_eq!(json["data"]["name"], "Chrono Trigger");
    assert_eq!(json["data"]["platform"], "SNES");
    assert_eq!(json["data"]["release_year"], 1995);
    assert_eq!(json["data"]["external_ref_id"], 4100);
}

#[tokio::test]
async fn test_get_update_delete_roundtrip() {
    let app = build_test_app();
    let id = create(&app, json!({"name": "Metroid", "platform": "NES"})).await;

    let response = get(app.clone(), &format!("/api/v1/favorites/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let original = body_json(response).await;
    assert_eq!(original["data"]["name"], "Metroid");

    let response = put_json(
        app.clone(),
        &format!("/api/v1/favorites/{id}"),
        json!({"name": "Super Metroid", "release_year": 1994}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["id"], id);
    assert_eq!(updated["data"]["name"], "Super Metroid");
    assert_eq!(updated["data"]["platform"], serde_json::Value::Null);
    assert_eq!(updated["data"]["added_at"], original["data"]["added_at"]);

    let response = delete(app.clone(), &format!("/api/v1/favorites/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/favorites/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_missing_ids_return_404() {
    let app = build_test_app();
    assert_eq!(
        get(app.clone(), "/api/v1/favorites/999").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        put_json(app.clone(), "/api/v1/favorites/999", json!({"name": "Ghost"}))
            .await
            .status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        delete(app, "/api/v1/favorites/999").await.status(),
        StatusCode::NOT_FOUND
    );
}

// ---------------------------------------------------------------------------
// Validation and duplicates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_validation_errors_name_the_field() {
    let app = build_test_app();
    for (body, field) in [
        (json!({"name": "Q"}), "name"),
        (
            json!({"name": "Doom", "image_url": "https://example.com/doom.bmp"}),
            "image_url",
        ),
        (json!({"name": "Pong", "release_year": 1969}), "release_year"),
        (json!({"name": "Future", "release_year": 2025}), "release_year"),
    ] {
        let response = post_json(app.clone(), "/api/v1/favorites", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["field"], field);
    }

    let list = body_json(get(app, "/api/v1/favorites").await).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn test_duplicate_external_ref_returns_409() {
    let app = build_test_app();
    create(&app, json!({"name": "Hades", "external_ref_id": 274755})).await;

    let response = post_json(
        app.clone(),
        "/api/v1/favorites",
        json!({"name": "Hades again", "external_ref_id": 274755}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DUPLICATE");

    let list = body_json(get(app, "/api/v1/favorites").await).await;
    assert_eq!(list["total"], 1);
}

#[tokio::test]
async fn test_update_to_taken_external_ref_returns_409() {
    let app = build_test_app();
    create(&app, json!({"name": "Celeste", "external_ref_id": 1})).await;
    let id = create(&app, json!({"name": "Hades", "external_ref_id": 2})).await;

    let response = put_json(
        app,
        &format!("/api/v1/favorites/{id}"),
        json!({"name": "Hades", "external_ref_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_external_ref_exists_and_lookup() {
    let app = build_test_app();
    let uri = "/api/v1/favorites/external/3328/exists";

    let json = body_json(get(app.clone(), uri).await).await;
    assert_eq!(json["data"]["exists"], false);

    let id = create(&app, json!({"name": "The Witcher 3", "external_ref_id": 3328})).await;
    let json = body_json(get(app.clone(), uri).await).await;
    assert_eq!(json["data"]["exists"], true);

    let json = body_json(get(app.clone(), "/api/v1/favorites/external/3328").await).await;
    assert_eq!(json["data"]["id"], id);

    delete(app.clone(), &format!("/api/v1/favorites/{id}")).await;
    let json = body_json(get(app.clone(), uri).await).await;
    assert_eq!(json["data"]["exists"], false);
    assert_eq!(
        get(app, "/api/v1/favorites/external/3328").await.status(),
        StatusCode::NOT_FOUND
    );
}

// ---------------------------------------------------------------------------
// Listing and search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_sort_modes() {
    let app = build_test_app();
    for name in ["Mario", "Zelda", "Celeste"] {
        create(&app, json!({ "name": name })).await;
    }

    let json = body_json(get(app.clone(), "/api/v1/favorites").await).await;
    assert_eq!(json["total"], 3);
    assert_eq!(names(&json), ["Celeste", "Zelda", "Mario"]);

    let json = body_json(get(app.clone(), "/api/v1/favorites?sort=name").await).await;
    assert_eq!(names(&json), ["Celeste", "Mario", "Zelda"]);

    // Unknown sort values fall back to recency.
    let json = body_json(get(app, "/api/v1/favorites?sort=bogus").await).await;
    assert_eq!(names(&json), ["Celeste", "Zelda", "Mario"]);
}

#[tokio::test]
async fn test_search_endpoints() {
    let app = build_test_app();
    create(
        &app,
        json!({"name": "Super Mario Bros.", "platform": "NES", "release_year": 1985}),
    )
    .await;
    create(
        &app,
        json!({"name": "Zelda", "platform": "nes", "release_year": 1986}),
    )
    .await;
    create(&app, json!({"name": "Celeste", "platform": "Switch"})).await;

    let json = body_json(get(app.clone(), "/api/v1/favorites/search?name=mario").await).await;
    assert_eq!(names(&json), ["Super Mario Bros."]);

    let json = body_json(get(app.clone(), "/api/v1/favorites/search?name=").await).await;
    assert_eq!(json["total"], 3);

    let json = body_json(get(app.clone(), "/api/v1/favorites/platform/NES").await).await;
    assert_eq!(json["total"], 2);

    let json = body_json(get(app.clone(), "/api/v1/favorites/platform/Nes/count").await).await;
    assert_eq!(json["data"]["count"], 2);

    let json = body_json(get(app.clone(), "/api/v1/favorites/year/1986").await).await;
    assert_eq!(names(&json), ["Zelda"]);

    let json = body_json(get(app.clone(), "/api/v1/favorites/years?from=1980&to=1989").await).await;
    assert_eq!(names(&json), ["Super Mario Bros.", "Zelda"]);

    let response = get(app, "/api/v1/favorites/years?from=1990&to=1980").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_name_search_requires_parameter() {
    let response = get(build_test_app(), "/api/v1/favorites/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_body_without_name_is_bad_request() {
    let response = post_json(
        build_test_app(),
        "/api/v1/favorites",
        json!({"platform": "NES"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_statistics_by_decade() {
    let app = build_test_app();
    for body in [
        json!({"name": "Zelda II", "release_year": 1988}),
        json!({"name": "Street Fighter II", "release_year": 1991}),
        json!({"name": "Final Fantasy VIII", "release_year": 1999}),
        json!({"name": "Homebrew"}),
    ] {
        create(&app, body).await;
    }

    let response = get(app, "/api/v1/favorites/stats").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 4);
    assert_eq!(
        json["data"]["by_decade"],
        json!({"1980s": 1, "1990s": 2})
    );
}

#[tokio::test]
async fn test_unparseable_path_segments_are_bad_request() {
    let app = build_test_app();
    for uri in [
        "/api/v1/favorites/abc",
        "/api/v1/favorites/year/nineteen-ninety",
        "/api/v1/favorites/external/99999999999",
        "/api/v1/favorites/external/abc/exists",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST", "{uri}");
    }

    let response = delete(app, "/api/v1/favorites/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
