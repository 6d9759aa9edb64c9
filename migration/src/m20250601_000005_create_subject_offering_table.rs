use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_branch_table::Branch, m20250601_000002_create_subject_table::Subject,
    m20250601_000003_create_teacher_table::Teacher,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubjectOffering::Table)
                    .if_not_exists()
                    .col(string_len(SubjectOffering::OfferingId, 20).primary_key())
                    .col(string_len(SubjectOffering::SubjectCode, 20))
                    .col(string_len(SubjectOffering::BranchCode, 10))
                    .col(string_len(SubjectOffering::Semester, 10))
                    .col(string_len(SubjectOffering::Credits, 5))
                    .col(string_len(SubjectOffering::AssignedTeacherId, 20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_offering_subject_code")
                            .from(SubjectOffering::Table, SubjectOffering::SubjectCode)
                            .to(Subject::Table, Subject::SubjectCode)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_offering_branch_code")
                            .from(SubjectOffering::Table, SubjectOffering::BranchCode)
                            .to(Branch::Table, Branch::BranchCode)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_offering_teacher_id")
                            .from(SubjectOffering::Table, SubjectOffering::AssignedTeacherId)
                            .to(Teacher::Table, Teacher::TeacherId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_subject_offerings_subject", SubjectOffering::SubjectCode),
            ("idx_subject_offerings_branch", SubjectOffering::BranchCode),
            ("idx_subject_offerings_teacher", SubjectOffering::AssignedTeacherId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .if_not_exists()
                        .table(SubjectOffering::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubjectOffering::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubjectOffering {
    #[sea_orm(iden = "subject_offerings")]
    Table,
    OfferingId,
    SubjectCode,
    BranchCode,
    Semester,
    Credits,
    AssignedTeacherId,
}
