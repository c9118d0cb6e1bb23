//! Health and readiness endpoints, and every route after the pool is closed.

use actix_web::http::StatusCode;
use serde_json::json;
use test_evidence_lib::config::NestedWrites;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_health_is_always_ok() {
    let pool = create_test_pool(NestedWrites::Transactional).await;
    let app = create_test_app(&pool).await;

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[actix_rt::test]
async fn test_closed_pool_fails_every_route() {
    let pool = create_test_pool(NestedWrites::Transactional).await;
    let app = create_test_app(&pool).await;

    let (status, body) = get_json(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "connected");

    // Closing any clone closes the shared pool
    pool.clone().close().await.unwrap();

    let (status, body) = get_json(&app, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());

    let (status, body) = get_json(&app, "/testcases").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let writes = [
        ("/testreport", nested_report_payload()),
        ("/testcase", json!({ "test_report_id": 1, "case_id": "DOWN-1" })),
        ("/testcase/evidence", json!({ "test_case_id": 1, "status": "passed" })),
        ("/summary", json!({ "test_report_id": 1, "total_cases": 1 })),
    ];
    for (path, payload) in writes {
        let (status, body) = post_json(&app, path, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "path {path}");
        assert!(body["error"].is_string(), "path {path}: {body}");
    }
}
