//! Summary entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "summaries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub test_report_id: i32,
    pub total_cases: i32,
    pub passed_cases: i32,
    pub failed_cases: i32,
    pub coverage: String, // e.g. "85%", kept as text
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_report::Entity",
        from = "Column::TestReportId",
        to = "super::test_report::Column::Id"
    )]
    TestReport,
}

impl Related<super::test_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestReport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
