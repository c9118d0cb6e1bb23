//! Summary API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Summary, decode};

/// Record the summary of an existing report.
#[utoipa::path(
    post,
    path = "/summary",
    tag = "Test Reports",
    request_body = Summary,
    responses(
        (status = 200, description = "Summary stored, id populated", body = Summary),
        (status = 400, description = "Malformed payload or storage failure", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_summary(
    pool: web::Data<DbPool>,
    body: web::Json<serde_json::Value>,
) -> AppResult<HttpResponse> {
    let payload: Summary = decode::object(body.into_inner())?;
    let summary = pool.create(payload).await?;

    info!(
        "Summary created: id={}, test_report_id={}, total={}, passed={}, failed={}",
        summary.id,
        summary.test_report_id,
        summary.total_cases,
        summary.passed_cases,
        summary.failed_cases
    );

    Ok(HttpResponse::Ok().json(summary))
}

/// Configure summary routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/summary").route(web::post().to(create_summary)));
}
