//! HTTP-level integration tests for `POST /api/v1/workflows`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json};
use grow_core::template::builtin_templates;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn creates_workflow_from_template(pool: PgPool) {
    let event = builtin_templates()
        .into_iter()
        .find(|t| t.id == "event")
        .unwrap();

    let response = post_json(
        build_test_app(pool),
        "/api/v1/workflows",
        json!({"templateId": "event"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let workflow = &json["data"];
    assert_eq!(workflow["templateId"], "event");
    assert_eq!(workflow["status"], "active");
    assert!(workflow["id"].as_str().unwrap().starts_with("workflow-"));
    assert!(workflow["name"]
        .as_str()
        .unwrap()
        .starts_with(&format!("{} - ", event.name)));

    let steps = workflow["steps"].as_array().unwrap();
    assert_eq!(steps.len(), event.steps().len());
    for (index, step) in steps.iter().enumerate() {
        assert_eq!(step["id"], format!("step-{index}"));
        assert_eq!(step["title"], event.steps()[index].as_str());
        assert_eq!(step["completed"], false);
        assert_eq!(step["estimatedTime"], "30-60 min");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn custom_name_is_kept(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/workflows",
        json!({"templateId": "workshop", "name": "Spring pottery class"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Spring pottery class");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_template_returns_404(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/workflows",
        json!({"templateId": "nope"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_template_id_returns_400(pool: PgPool) {
    let response = post_json(build_test_app(pool), "/api/v1/workflows", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "templateId is required");
}
