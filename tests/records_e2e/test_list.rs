//! GET /testcases: whole collection, evidences loaded eagerly.

use actix_web::http::StatusCode;
use serde_json::json;
use test_evidence_lib::config::NestedWrites;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_list_empty_returns_empty_array() {
    let pool = create_test_pool(NestedWrites::Transactional).await;
    let app = create_test_app(&pool).await;

    let (status, body) = get_json(&app, "/testcases").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[actix_rt::test]
async fn test_list_returns_every_case_with_evidences() {
    let pool = create_test_pool(NestedWrites::Transactional).await;
    let app = create_test_app(&pool).await;

    let (status, report) = post_json(&app, "/testreport", nested_report_payload()).await;
    assert_eq!(status, StatusCode::OK);
    let report_id = report["id"].as_i64().unwrap();

    // A standalone case without evidence
    let (status, _) = post_json(
        &app,
        "/testcase",
        json!({ "test_report_id": report_id, "case_id": "CART-3" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(&app, "/testcases").await;
    assert_eq!(status, StatusCode::OK);

    let cases = body.as_array().unwrap();
    assert_eq!(cases.len(), 3);

    let case_ids: Vec<&str> = cases.iter().map(|c| c["case_id"].as_str().unwrap()).collect();
    assert_eq!(case_ids, vec!["CART-1", "CART-2", "CART-3"]);

    // Evidences are the ones written under each case
    assert_eq!(cases[0], report["test_cases"][0]);
    assert_eq!(cases[1], report["test_cases"][1]);
    assert_eq!(cases[2]["evidences"], json!([]));
}

#[actix_rt::test]
async fn test_list_includes_evidence_added_later() {
    let pool = create_test_pool(NestedWrites::Transactional).await;
    let app = create_test_app(&pool).await;
    let report_id = seed_report(&app, "late-evidence").await;

    let (_, case) = post_json(
        &app,
        "/testcase",
        json!({ "test_report_id": report_id, "case_id": "SEARCH-1" }),
    )
    .await;
    let case_id = case["id"].as_i64().unwrap();

    for status in ["failed", "passed"] {
        let (code, _) = post_json(
            &app,
            "/testcase/evidence",
            json!({ "test_case_id": case_id, "status": status }),
        )
        .await;
        assert_eq!(code, StatusCode::OK);
    }

    let (_, body) = get_json(&app, "/testcases").await;
    let evidences = body[0]["evidences"].as_array().unwrap();
    assert_eq!(evidences.len(), 2);
    assert_eq!(evidences[0]["status"], "failed");
    assert_eq!(evidences[1]["status"], "passed");
}

#[actix_rt::test]
async fn test_list_count_tracks_creates() {
    let pool = create_test_pool(NestedWrites::Transactional).await;
    let app = create_test_app(&pool).await;
    let report_id = seed_report(&app, "count").await;

    for n in 1..=5 {
        let (status, _) = post_json(
            &app,
            "/testcase",
            json!({ "test_report_id": report_id, "case_id": format!("C-{n}") }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = get_json(&app, "/testcases").await;
        assert_eq!(body.as_array().unwrap().len(), n);
    }
}
