use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_branch_table::Branch;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(string_len(Student::RollNo, 20).primary_key())
                    .col(string_len(Student::FirstName, 50))
                    .col(string_len(Student::LastName, 50))
                    .col(string_len(Student::DateOfBirth, 8))
                    .col(string_len(Student::CredentialHash, 255))
                    .col(string_len(Student::BranchCode, 10))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_branch_code")
                            .from(Student::Table, Student::BranchCode)
                            .to(Branch::Table, Branch::BranchCode)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_branch")
                    .if_not_exists()
                    .table(Student::Table)
                    .col(Student::BranchCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    #[sea_orm(iden = "students")]
    Table,
    RollNo,
    FirstName,
    LastName,
    DateOfBirth,
    CredentialHash,
    BranchCode,
}
