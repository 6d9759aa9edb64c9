use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000004_create_student_table::Student,
    m20250601_000005_create_subject_offering_table::SubjectOffering,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExamResult::Table)
                    .if_not_exists()
                    .col(string_len(ExamResult::RollNo, 20))
                    .col(string_len(ExamResult::OfferingId, 20))
                    .col(string_len(ExamResult::TheoryMarks, 5))
                    .col(string_len(ExamResult::InternalMarks, 5))
                    .col(string_len(ExamResult::TotalMarks, 5))
                    .col(string_len(ExamResult::GradePoint, 5))
                    .col(string_len(ExamResult::Status, 10))
                    .primary_key(
                        Index::create()
                            .col(ExamResult::RollNo)
                            .col(ExamResult::OfferingId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_roll_no")
                            .from(ExamResult::Table, ExamResult::RollNo)
                            .to(Student::Table, Student::RollNo)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_offering_id")
                            .from(ExamResult::Table, ExamResult::OfferingId)
                            .to(SubjectOffering::Table, SubjectOffering::OfferingId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_results_student")
                    .if_not_exists()
                    .table(ExamResult::Table)
                    .col(ExamResult::RollNo)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_results_offering")
                    .if_not_exists()
                    .table(ExamResult::Table)
                    .col(ExamResult::OfferingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExamResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExamResult {
    #[sea_orm(iden = "results")]
    Table,
    RollNo,
    OfferingId,
    TheoryMarks,
    InternalMarks,
    TotalMarks,
    GradePoint,
    Status,
}
