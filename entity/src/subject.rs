use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub subject_code: String,
    pub subject_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subject_offering::Entity")]
    SubjectOffering,
}

impl Related<super::subject_offering::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubjectOffering.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
