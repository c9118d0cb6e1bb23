//! Database writes for test case evidence.

use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

use crate::entity::test_case_evidence::ActiveModel;
use crate::error::AppResult;
use crate::models::TestCaseEvidence;

use super::Persist;

impl Persist for TestCaseEvidence {
    async fn persist<C: ConnectionTrait>(self, db: &C) -> AppResult<Self> {
        let evidence = ActiveModel {
            test_case_id: Set(self.test_case_id),
            description: Set(self.description),
            expected_result: Set(self.expected_result),
            actual_result: Set(self.actual_result),
            status: Set(self.status),
            screenshot_url: Set(self.screenshot_url),
            log_file: Set(self.log_file),
            ..Default::default()
        }
        .insert(db)
        .await?;

        Ok(evidence.into())
    }
}
