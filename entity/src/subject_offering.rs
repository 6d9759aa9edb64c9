use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subject_offerings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub offering_id: String,
    pub subject_code: String,
    pub branch_code: String,
    pub semester: String,
    pub credits: String,
    pub assigned_teacher_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectCode",
        to = "super::subject::Column::SubjectCode"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::branch::Entity",
        from = "Column::BranchCode",
        to = "super::branch::Column::BranchCode"
    )]
    Branch,
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::AssignedTeacherId",
        to = "super::teacher::Column::TeacherId"
    )]
    Teacher,
    #[sea_orm(has_many = "super::exam_result::Entity")]
    ExamResult,
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::exam_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
