//! Database writes for test reports.

use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

use crate::entity::test_report::ActiveModel;
use crate::error::AppResult;
use crate::models::TestReport;

use super::Persist;

impl Persist for TestReport {
    /// Insert the report, then its cases (with their evidences) and its summary,
    /// each pointed at the new report id.
    async fn persist<C: ConnectionTrait>(self, db: &C) -> AppResult<Self> {
        let report = ActiveModel {
            project_name: Set(self.project_name),
            version: Set(self.version),
            test_date: Set(self.test_date),
            tester_name: Set(self.tester_name),
            test_type: Set(self.test_type),
            os: Set(self.os),
            browser_version: Set(self.browser_version),
            db_version: Set(self.db_version),
            additional_details: Set(self.additional_details),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let mut test_cases = Vec::with_capacity(self.test_cases.len());
        for mut case in self.test_cases {
            case.test_report_id = report.id;
            test_cases.push(case.persist(db).await?);
        }

        let summary = match self.summary {
            Some(mut summary) => {
                summary.test_report_id = report.id;
                Some(summary.persist(db).await?)
            }
            None => None,
        };

        Ok(TestReport::from_entity(report, test_cases, summary))
    }
}
