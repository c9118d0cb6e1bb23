//! Database queries for test cases.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, LoaderTrait, QueryOrder, Set};

use crate::entity::test_case::{self, ActiveModel, Entity as TestCaseEntity};
use crate::entity::test_case_evidence::{self, Entity as EvidenceEntity};
use crate::error::AppResult;
use crate::models::{TestCase, TestCaseEvidence};

use super::{DbPool, Persist};

impl Persist for TestCase {
    /// Insert the case, then each evidence pointed at the new case id.
    async fn persist<C: ConnectionTrait>(self, db: &C) -> AppResult<Self> {
        let case = ActiveModel {
            test_report_id: Set(self.test_report_id),
            case_id: Set(self.case_id),
            description: Set(self.description),
            priority: Set(self.priority),
            status: Set(self.status),
            remarks: Set(self.remarks),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let mut evidences = Vec::with_capacity(self.evidences.len());
        for mut evidence in self.evidences {
            evidence.test_case_id = case.id;
            evidences.push(evidence.persist(db).await?);
        }

        Ok(TestCase::from_entity(case, evidences))
    }
}

impl DbPool {
    /// List every test case with its evidences, both ordered by id.
    ///
    /// Evidences are loaded eagerly with one extra query for the whole batch.
    pub async fn list_test_cases(&self) -> AppResult<Vec<TestCase>> {
        let cases = TestCaseEntity::find()
            .order_by_asc(test_case::Column::Id)
            .all(self.connection())
            .await?;

        if cases.is_empty() {
            return Ok(Vec::new());
        }

        let evidences = cases
            .load_many(
                EvidenceEntity::find().order_by_asc(test_case_evidence::Column::Id),
                self.connection(),
            )
            .await?;

        Ok(cases
            .into_iter()
            .zip(evidences)
            .map(|(case, evidences)| {
                TestCase::from_entity(
                    case,
                    evidences.into_iter().map(TestCaseEvidence::from).collect(),
                )
            })
            .collect())
    }
}
