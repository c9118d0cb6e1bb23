//! TestCase entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "test_cases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub test_report_id: i32,
    pub case_id: String, // caller-defined, not unique
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub priority: String,
    pub status: String,
    #[sea_orm(column_type = "Text")]
    pub remarks: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_report::Entity",
        from = "Column::TestReportId",
        to = "super::test_report::Column::Id"
    )]
    TestReport,
    #[sea_orm(has_many = "super::test_case_evidence::Entity")]
    Evidences,
}

impl Related<super::test_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestReport.def()
    }
}

impl Related<super::test_case_evidence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evidences.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
