//! Test report API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{TestReport, decode};

/// Record a test report.
///
/// Test cases (with their evidences) and the summary may be nested in the
/// same payload; they are stored and linked to the new report.
#[utoipa::path(
    post,
    path = "/testreport",
    tag = "Test Reports",
    request_body = TestReport,
    responses(
        (status = 200, description = "Report stored, ids populated", body = TestReport),
        (status = 400, description = "Malformed payload or storage failure", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_test_report(
    pool: web::Data<DbPool>,
    body: web::Json<serde_json::Value>,
) -> AppResult<HttpResponse> {
    let payload: TestReport = decode::object(body.into_inner())?;
    let report = pool.create(payload).await?;

    info!(
        "Test report created: id={}, project={}, test_cases={}, summary={}",
        report.id,
        report.project_name,
        report.test_cases.len(),
        report.summary.is_some()
    );

    Ok(HttpResponse::Ok().json(report))
}

/// Configure test report routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/testreport").route(web::post().to(create_test_report)));
}
