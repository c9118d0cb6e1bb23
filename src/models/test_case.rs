//! Test case model: one scenario evaluated within a report.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::TestCaseEvidence;

/// A test scenario within a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TestCase {
    /// Assigned by the server; ignored on create.
    #[serde(deserialize_with = "super::decode::id")]
    pub id: i32,
    /// Owning report. Overwritten when the case is nested in a report payload.
    #[serde(deserialize_with = "super::decode::id")]
    pub test_report_id: i32,
    /// Caller-defined identifier, duplicates allowed.
    pub case_id: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub remarks: String,
    #[serde(deserialize_with = "super::decode::objects")]
    pub evidences: Vec<TestCaseEvidence>,
}

impl TestCase {
    /// Build the API representation from a stored row and its evidences.
    pub fn from_entity(
        m: crate::entity::test_case::Model,
        evidences: Vec<TestCaseEvidence>,
    ) -> Self {
        Self {
            id: m.id,
            test_report_id: m.test_report_id,
            case_id: m.case_id,
            description: m.description,
            priority: m.priority,
            status: m.status,
            remarks: m.remarks,
            evidences,
        }
    }
}
