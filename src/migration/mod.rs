//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_test_reports;
mod m20261018_000002_create_test_cases;
mod m20261018_000003_create_test_case_evidences;
mod m20261018_000004_create_summaries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_test_reports::Migration),
            Box::new(m20261018_000002_create_test_cases::Migration),
            Box::new(m20261018_000003_create_test_case_evidences::Migration),
            Box::new(m20261018_000004_create_summaries::Migration),
        ]
    }
}
