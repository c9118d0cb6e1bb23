//! Test case API handlers.

use actix_web::{HttpResponse, web};
use tracing::{debug, info};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{TestCase, decode};

/// Record a test case, with any nested evidences.
#[utoipa::path(
    post,
    path = "/testcase",
    tag = "Test Cases",
    request_body = TestCase,
    responses(
        (status = 200, description = "Test case stored, ids populated", body = TestCase),
        (status = 400, description = "Malformed payload or storage failure", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_test_case(
    pool: web::Data<DbPool>,
    body: web::Json<serde_json::Value>,
) -> AppResult<HttpResponse> {
    let payload: TestCase = decode::object(body.into_inner())?;
    let case = pool.create(payload).await?;

    info!(
        "Test case created: id={}, test_report_id={}, case_id={}, evidences={}",
        case.id,
        case.test_report_id,
        case.case_id,
        case.evidences.len()
    );

    Ok(HttpResponse::Ok().json(case))
}

/// List all test cases.
///
/// Returns the whole collection, each case with its evidences.
#[utoipa::path(
    get,
    path = "/testcases",
    tag = "Test Cases",
    responses(
        (status = 200, description = "All test cases", body = Vec<TestCase>),
        (status = 400, description = "Storage failure", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_test_cases(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let cases = pool.list_test_cases().await?;
    debug!("Listed {} test cases", cases.len());

    Ok(HttpResponse::Ok().json(cases))
}

/// Configure test case routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/testcase").route(web::post().to(create_test_case)))
        .service(web::resource("/testcases").route(web::get().to(list_test_cases)));
}
