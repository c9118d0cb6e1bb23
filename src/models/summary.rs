//! Aggregate pass/fail counters for one report.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Report summary. Counters are stored as given and never cross-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Summary {
    #[serde(deserialize_with = "super::decode::id")]
    pub id: i32,
    #[serde(deserialize_with = "super::decode::id")]
    pub test_report_id: i32,
    pub total_cases: i32,
    pub passed_cases: i32,
    pub failed_cases: i32,
    /// Free text such as `"85%"`.
    pub coverage: String,
}

impl From<crate::entity::summary::Model> for Summary {
    fn from(m: crate::entity::summary::Model) -> Self {
        Self {
            id: m.id,
            test_report_id: m.test_report_id,
            total_cases: m.total_cases,
            passed_cases: m.passed_cases,
            failed_cases: m.failed_cases,
            coverage: m.coverage,
        }
    }
}
