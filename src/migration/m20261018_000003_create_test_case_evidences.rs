//! Create test_case_evidences table.

use sea_orm_migration::prelude::*;

use super::m20261018_000002_create_test_cases::TestCase;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestCaseEvidence::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestCaseEvidence::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestCaseEvidence::TestCaseId).integer().not_null())
                    .col(ColumnDef::new(TestCaseEvidence::Description).text().not_null())
                    .col(ColumnDef::new(TestCaseEvidence::ExpectedResult).text().not_null())
                    .col(ColumnDef::new(TestCaseEvidence::ActualResult).text().not_null())
                    .col(ColumnDef::new(TestCaseEvidence::Status).string().not_null())
                    .col(ColumnDef::new(TestCaseEvidence::ScreenshotUrl).text().not_null())
                    .col(ColumnDef::new(TestCaseEvidence::LogFile).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_case_evidences_test_case_id")
                            .from(TestCaseEvidence::Table, TestCaseEvidence::TestCaseId)
                            .to(TestCase::Table, TestCase::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_case_evidences_test_case_id")
                    .table(TestCaseEvidence::Table)
                    .col(TestCaseEvidence::TestCaseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestCaseEvidence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TestCaseEvidence {
    #[sea_orm(iden = "test_case_evidences")]
    Table,
    Id,
    TestCaseId,
    Description,
    ExpectedResult,
    ActualResult,
    Status,
    ScreenshotUrl,
    LogFile,
}
