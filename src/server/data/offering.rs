//! Subject offering data repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::offering::SubjectOffering;

pub struct OfferingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfferingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<SubjectOffering>, DbErr> {
        let entities = entity::prelude::SubjectOffering::find()
            .order_by_asc(entity::subject_offering::Column::OfferingId)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(SubjectOffering::from_entity)
            .collect())
    }

    /// Gets every offering assigned to the teacher, ordered by offering ID.
    pub async fn get_by_teacher(&self, teacher_id: &str) -> Result<Vec<SubjectOffering>, DbErr> {
        let entities = entity::prelude::SubjectOffering::find()
            .filter(entity::subject_offering::Column::AssignedTeacherId.eq(teacher_id))
            .order_by_asc(entity::subject_offering::Column::OfferingId)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(SubjectOffering::from_entity)
            .collect())
    }

    /// Gets the offerings whose IDs appear in `offering_ids`, skipping unknown IDs.
    pub async fn get_by_ids(&self, offering_ids: &[String]) -> Result<Vec<SubjectOffering>, DbErr> {
        if offering_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::SubjectOffering::find()
            .filter(
                entity::subject_offering::Column::OfferingId.is_in(offering_ids.iter().cloned()),
            )
            .order_by_asc(entity::subject_offering::Column::OfferingId)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(SubjectOffering::from_entity)
            .collect())
    }
}
