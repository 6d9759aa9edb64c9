use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub teacher_id: String,
    pub teacher_name: String,
    /// Argon2 PHC string.
    pub password_hash: String,
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
