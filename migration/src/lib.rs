pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_branch_table;
mod m20250601_000002_create_subject_table;
mod m20250601_000003_create_teacher_table;
mod m20250601_000004_create_student_table;
mod m20250601_000005_create_subject_offering_table;
mod m20250601_000006_create_result_table;
mod m20250601_000007_create_admin_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_branch_table::Migration),
            Box::new(m20250601_000002_create_subject_table::Migration),
            Box::new(m20250601_000003_create_teacher_table::Migration),
            Box::new(m20250601_000004_create_student_table::Migration),
            Box::new(m20250601_000005_create_subject_offering_table::Migration),
            Box::new(m20250601_000006_create_result_table::Migration),
            Box::new(m20250601_000007_create_admin_table::Migration),
        ]
    }
}
