pub use sea_orm_migration::prelude::*;

mod m20260301_000001_enable_unaccent;
mod m20260301_000002_create_user_table;
mod m20260301_000003_create_badminton_session_table;
mod m20260301_000004_create_member_table;
mod m20260301_000005_create_request_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_enable_unaccent::Migration),
            Box::new(m20260301_000002_create_user_table::Migration),
            Box::new(m20260301_000003_create_badminton_session_table::Migration),
            Box::new(m20260301_000004_create_member_table::Migration),
            Box::new(m20260301_000005_create_request_table::Migration),
        ]
    }
}
