//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Test Evidence Server",
        version = "0.1.0",
        description = "Records test reports, their test cases, evidence for each case and pass/fail summaries"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Report endpoints
        api::test_reports::create_test_report,
        api::summaries::create_summary,
        // Test case endpoints
        api::test_cases::create_test_case,
        api::test_cases::list_test_cases,
        api::test_case_evidences::create_test_case_evidence,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Records
            models::TestReport,
            models::TestCase,
            models::TestCaseEvidence,
            models::Summary,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Test Reports", description = "Test reports and their summaries"),
        (name = "Test Cases", description = "Test cases and their evidence"),
    )
)]
pub struct ApiDoc;
