//! Subject data repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::academic::Subject;

pub struct SubjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Subject>, DbErr> {
        let entities = entity::prelude::Subject::find()
            .order_by_asc(entity::subject::Column::SubjectCode)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Subject::from_entity).collect())
    }

    /// Gets the subjects whose codes appear in `subject_codes`, skipping unknown codes.
    pub async fn get_by_codes(&self, subject_codes: &[String]) -> Result<Vec<Subject>, DbErr> {
        if subject_codes.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Subject::find()
            .filter(entity::subject::Column::SubjectCode.is_in(subject_codes.iter().cloned()))
            .order_by_asc(entity::subject::Column::SubjectCode)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Subject::from_entity).collect())
    }
}
