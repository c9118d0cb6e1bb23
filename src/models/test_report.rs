//! Test report model: one execution run and everything recorded about it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Summary, TestCase};

/// A test execution run.
///
/// May carry its test cases and summary inline; they are written together
/// with the report and linked to it by `test_report_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TestReport {
    /// Assigned by the server; ignored on create.
    #[serde(deserialize_with = "super::decode::id")]
    pub id: i32,
    pub project_name: String,
    pub version: String,
    /// Free text, not validated as a calendar date.
    pub test_date: String,
    pub tester_name: String,
    pub test_type: String,
    pub os: String,
    pub browser_version: String,
    pub db_version: String,
    pub additional_details: String,
    #[serde(deserialize_with = "super::decode::objects")]
    pub test_cases: Vec<TestCase>,
    /// Absent or `null` means no summary is written.
    #[serde(deserialize_with = "super::decode::optional_object")]
    pub summary: Option<Summary>,
}

impl TestReport {
    /// Build the API representation from a stored row and its stored children.
    pub fn from_entity(
        m: crate::entity::test_report::Model,
        test_cases: Vec<TestCase>,
        summary: Option<Summary>,
    ) -> Self {
        Self {
            id: m.id,
            project_name: m.project_name,
            version: m.version,
            test_date: m.test_date,
            tester_name: m.tester_name,
            test_type: m.test_type,
            os: m.os,
            browser_version: m.browser_version,
            db_version: m.db_version,
            additional_details: m.additional_details,
            test_cases,
            summary,
        }
    }
}
