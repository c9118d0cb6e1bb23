//! Evidence attached to a single test case.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Supporting evidence for a test case.
///
/// `screenshot_url` and `log_file` are references only; the files themselves
/// are not stored by this server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TestCaseEvidence {
    #[serde(deserialize_with = "super::decode::id")]
    pub id: i32,
    #[serde(deserialize_with = "super::decode::id")]
    pub test_case_id: i32,
    pub description: String,
    pub expected_result: String,
    pub actual_result: String,
    pub status: String,
    pub screenshot_url: String,
    pub log_file: String,
}

impl From<crate::entity::test_case_evidence::Model> for TestCaseEvidence {
    fn from(m: crate::entity::test_case_evidence::Model) -> Self {
        Self {
            id: m.id,
            test_case_id: m.test_case_id,
            description: m.description,
            expected_result: m.expected_result,
            actual_result: m.actual_result,
            status: m.status,
            screenshot_url: m.screenshot_url,
            log_file: m.log_file,
        }
    }
}
