//! Test case evidence API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{TestCaseEvidence, decode};

/// Attach evidence to an existing test case.
#[utoipa::path(
    post,
    path = "/testcase/evidence",
    tag = "Test Cases",
    request_body = TestCaseEvidence,
    responses(
        (status = 200, description = "Evidence stored, id populated", body = TestCaseEvidence),
        (status = 400, description = "Malformed payload or storage failure", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_test_case_evidence(
    pool: web::Data<DbPool>,
    body: web::Json<serde_json::Value>,
) -> AppResult<HttpResponse> {
    let payload: TestCaseEvidence = decode::object(body.into_inner())?;
    let evidence = pool.create(payload).await?;

    info!(
        "Evidence created: id={}, test_case_id={}, status={}",
        evidence.id, evidence.test_case_id, evidence.status
    );

    Ok(HttpResponse::Ok().json(evidence))
}

/// Configure evidence routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/testcase/evidence").route(web::post().to(create_test_case_evidence)),
    );
}
