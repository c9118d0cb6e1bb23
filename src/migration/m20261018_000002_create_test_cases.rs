//! Create test_cases table.

use sea_orm_migration::prelude::*;

use super::m20261018_000001_create_test_reports::TestReport;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestCase::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestCase::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestCase::TestReportId).integer().not_null())
                    // No unique constraint: case ids are caller-defined labels
                    .col(ColumnDef::new(TestCase::CaseId).string().not_null())
                    .col(ColumnDef::new(TestCase::Description).text().not_null())
                    .col(ColumnDef::new(TestCase::Priority).string().not_null())
                    .col(ColumnDef::new(TestCase::Status).string().not_null())
                    .col(ColumnDef::new(TestCase::Remarks).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_cases_test_report_id")
                            .from(TestCase::Table, TestCase::TestReportId)
                            .to(TestReport::Table, TestReport::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_cases_test_report_id")
                    .table(TestCase::Table)
                    .col(TestCase::TestReportId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestCase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TestCase {
    #[sea_orm(iden = "test_cases")]
    Table,
    Id,
    TestReportId,
    CaseId,
    Description,
    Priority,
    Status,
    Remarks,
}
