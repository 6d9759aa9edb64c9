use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "results")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub roll_no: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub offering_id: String,
    pub theory_marks: String,
    pub internal_marks: String,
    pub total_marks: String,
    pub grade_point: String,
    /// `"Pass"` or `"Fail"`
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::RollNo",
        to = "super::student::Column::RollNo"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::subject_offering::Entity",
        from = "Column::OfferingId",
        to = "super::subject_offering::Column::OfferingId"
    )]
    SubjectOffering,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::subject_offering::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubjectOffering.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
