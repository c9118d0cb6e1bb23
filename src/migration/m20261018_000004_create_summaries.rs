//! Create summaries table.

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
                    .table(Summary::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Summary::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Summary::TestReportId).integer().not_null())
                    .col(ColumnDef::new(Summary::TotalCases).integer().not_null())
                    .col(ColumnDef::new(Summary::PassedCases).integer().not_null())
                    .col(ColumnDef::new(Summary::FailedCases).integer().not_null())
                    .col(ColumnDef::new(Summary::Coverage).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_summaries_test_report_id")
                            .from(Summary::Table, Summary::TestReportId)
                            .to(TestReport::Table, TestReport::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_summaries_test_report_id")
                    .table(Summary::Table)
                    .col(Summary::TestReportId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Summary::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Summary {
    #[sea_orm(iden = "summaries")]
    Table,
    Id,
    TestReportId,
    TotalCases,
    PassedCases,
    FailedCases,
    Coverage,
}
