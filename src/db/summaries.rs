//! Database writes for report summaries.

use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

use crate::entity::summary::ActiveModel;
use crate::error::AppResult;
use crate::models::Summary;

use super::Persist;

impl Persist for Summary {
    async fn persist<C: ConnectionTrait>(self, db: &C) -> AppResult<Self> {
        let summary = ActiveModel {
            test_report_id: Set(self.test_report_id),
            total_cases: Set(self.total_cases),
            passed_cases: Set(self.passed_cases),
            failed_cases: Set(self.failed_cases),
            coverage: Set(self.coverage),
            ..Default::default()
        }
        .insert(db)
        .await?;

        Ok(summary.into())
    }
}
