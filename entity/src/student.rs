use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub roll_no: String,
    pub first_name: String,
    pub last_name: String,
    /// `YYYYMMDD`
    pub date_of_birth: String,
    /// Argon2 PHC string of the date-of-birth login credential.
    pub credential_hash: String,
    pub branch_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::branch::Entity",
        from = "Column::BranchCode",
        to = "super::branch::Column::BranchCode"
    )]
    Branch,
    #[sea_orm(has_many = "super::exam_result::Entity")]
    ExamResult,
}

impl Related<super::branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

impl Related<super::exam_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
