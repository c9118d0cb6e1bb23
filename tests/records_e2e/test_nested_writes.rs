//! Atomicity of nested creates under each write mode.
//!
//! The evidence table is dropped to make the deepest insert fail after the
//! report and its first case have been written.

use actix_web::http::StatusCode;
use sea_orm::ConnectionTrait;
use test_evidence_lib::config::NestedWrites;
use test_evidence_lib::error::AppError;
use test_evidence_lib::models::{Summary, TestCase, TestCaseEvidence, TestReport};

use super::test_helpers::*;

async fn drop_evidence_table(pool: &test_evidence_lib::db::DbPool) {
    pool.connection()
        .execute_unprepared("DROP TABLE test_case_evidences")
        .await
        .expect("Failed to drop evidence table");
}

#[actix_rt::test]
async fn test_transactional_failure_leaves_no_rows() {
    let pool = create_test_pool(NestedWrites::Transactional).await;
    let app = create_test_app(&pool).await;
    drop_evidence_table(&pool).await;

    let (status, body) = post_json(&app, "/testreport", nested_report_payload()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, cases) = get_json(&app, "/testcases").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cases, serde_json::json!([]));
    assert_eq!(pool.list_test_cases().await.unwrap().len(), 0);
}

#[actix_rt::test]
async fn test_best_effort_failure_keeps_earlier_rows() {
    let pool = create_test_pool(NestedWrites::BestEffort).await;
    let app = create_test_app(&pool).await;
    drop_evidence_table(&pool).await;

    let (status, _) = post_json(&app, "/testreport", nested_report_payload()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Report and first case were written before the evidence insert failed
    let report_count = {
        use sea_orm::{EntityTrait, PaginatorTrait};
        test_evidence_lib::entity::test_report::Entity::find()
            .count(pool.connection())
            .await
            .unwrap()
    };
    assert_eq!(report_count, 1);

    // Listing now fails too: evidences cannot be loaded without their table
    let err = pool.list_test_cases().await.unwrap_err();
    assert!(matches!(err, AppError::Persistence(_)));
}

#[actix_rt::test]
async fn test_gateway_create_without_http() {
    let pool = create_test_pool(NestedWrites::Transactional).await;

    let report = TestReport {
        id: 31337,
        project_name: "gateway".to_string(),
        test_cases: vec![TestCase {
            case_id: "G-1".to_string(),
            evidences: vec![TestCaseEvidence {
                expected_result: "200".to_string(),
                actual_result: "200".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }],
        summary: Some(Summary {
            total_cases: 1,
            passed_cases: 1,
            coverage: "100%".to_string(),
            ..Default::default()
        }),
        ..Default::default()
    };

    let stored = pool.create(report.clone()).await.unwrap();
    assert_ne!(stored.id, 31337);

    let case = &stored.test_cases[0];
    assert_eq!(case.test_report_id, stored.id);
    assert_eq!(case.evidences[0].test_case_id, case.id);
    assert_eq!(stored.summary.as_ref().unwrap().test_report_id, stored.id);

    // Everything except ids and foreign keys round-trips unchanged
    let mut expected = report;
    expected.id = stored.id;
    expected.test_cases[0].id = case.id;
    expected.test_cases[0].test_report_id = stored.id;
    expected.test_cases[0].evidences[0].id = case.evidences[0].id;
    expected.test_cases[0].evidences[0].test_case_id = case.id;
    let summary = expected.summary.as_mut().unwrap();
    summary.id = stored.summary.as_ref().unwrap().id;
    summary.test_report_id = stored.id;
    assert_eq!(stored, expected);

    let listed = pool.list_test_cases().await.unwrap();
    assert_eq!(listed, stored.test_cases);
    assert_eq!(row_counts(&pool).await, (1, 1, 1, 1));
}
