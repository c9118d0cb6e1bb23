//! Create test_reports table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestReport::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestReport::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestReport::ProjectName).string().not_null())
                    .col(ColumnDef::new(TestReport::Version).string().not_null())
                    .col(ColumnDef::new(TestReport::TestDate).string().not_null())
                    .col(ColumnDef::new(TestReport::TesterName).string().not_null())
                    .col(ColumnDef::new(TestReport::TestType).string().not_null())
                    .col(ColumnDef::new(TestReport::Os).string().not_null())
                    .col(ColumnDef::new(TestReport::BrowserVersion).string().not_null())
                    .col(ColumnDef::new(TestReport::DbVersion).string().not_null())
                    .col(ColumnDef::new(TestReport::AdditionalDetails).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestReport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TestReport {
    #[sea_orm(iden = "test_reports")]
    Table,
    Id,
    ProjectName,
    Version,
    TestDate,
    TesterName,
    TestType,
    Os,
    BrowserVersion,
    DbVersion,
    AdditionalDetails,
}
