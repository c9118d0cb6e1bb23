//! API endpoint modules.

pub mod health;
pub mod openapi;
pub mod summaries;
pub mod test_case_evidences;
pub mod test_cases;
pub mod test_reports;

use actix_web::web;

use crate::error::AppError;

pub use health::configure_health_routes;
pub use openapi::ApiDoc;

/// Configure the record routes (reports, cases, evidence, summaries).
///
/// Bodies that fail to decode are answered with a `DecodeError` before any
/// handler runs. The content type is not checked.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(|err, _req| AppError::from(err).into()),
    )
    .configure(test_reports::configure_routes)
    .configure(test_cases::configure_routes)
    .configure(test_case_evidences::configure_routes)
    .configure(summaries::configure_routes);
}
