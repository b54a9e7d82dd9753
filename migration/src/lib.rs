pub use sea_orm_migration::prelude::*;

mod m20250915_000001_create_users_table;
mod m20250915_000002_create_categories_table;
mod m20250915_000003_create_detail_tables;
mod m20250915_000004_create_service_requests_table;
mod m20250915_000005_create_proposals_table;
mod m20250916_000001_seed_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250915_000001_create_users_table::Migration),
            Box::new(m20250915_000002_create_categories_table::Migration),
            Box::new(m20250915_000003_create_detail_tables::Migration),
            Box::new(m20250915_000004_create_service_requests_table::Migration),
            Box::new(m20250915_000005_create_proposals_table::Migration),
            Box::new(m20250916_000001_seed_categories::Migration),
        ]
    }
}
