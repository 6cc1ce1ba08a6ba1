pub use sea_orm_migration::prelude::*;

mod m20250315_000001_create_dormitories_table;
mod m20250315_000002_create_rooms_table;
mod m20250315_000003_create_tenants_table;
mod m20250315_000004_create_contracts_table;
mod m20250315_000005_create_payments_table;
mod m20250315_000006_create_utilities_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250315_000001_create_dormitories_table::Migration),
            Box::new(m20250315_000002_create_rooms_table::Migration),
            Box::new(m20250315_000003_create_tenants_table::Migration),
            Box::new(m20250315_000004_create_contracts_table::Migration),
            Box::new(m20250315_000005_create_payments_table::Migration),
            Box::new(m20250315_000006_create_utilities_table::Migration),
        ]
    }
}
