//! Exam result data repository.
//!
//! Results are keyed by (roll number, offering ID) and are loaded either for a single
//! student or for a set of offerings.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::exam_result::ExamResult;

pub struct ExamResultRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExamResultRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every result ordered by roll number, then offering ID.
    pub async fn get_all(&self) -> Result<Vec<ExamResult>, DbErr> {
        let entities = entity::prelude::ExamResult::find()
            .order_by_asc(entity::exam_result::Column::RollNo)
            .order_by_asc(entity::exam_result::Column::OfferingId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ExamResult::from_entity).collect())
    }

    /// Gets a student's results ordered by offering ID.
    pub async fn get_by_roll_no(&self, roll_no: &str) -> Result<Vec<ExamResult>, DbErr> {
        let entities = entity::prelude::ExamResult::find()
            .filter(entity::exam_result::Column::RollNo.eq(roll_no))
            .order_by_asc(entity::exam_result::Column::OfferingId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ExamResult::from_entity).collect())
    }

    /// Gets the results of the given offerings ordered by offering ID, then roll number.
    ///
    /// An empty slice returns an empty list without querying.
    pub async fn get_by_offering_ids(
        &self,
        offering_ids: &[String],
    ) -> Result<Vec<ExamResult>, DbErr> {
        if offering_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ExamResult::find()
            .filter(entity::exam_result::Column::OfferingId.is_in(offering_ids.iter().cloned()))
            .order_by_asc(entity::exam_result::Column::OfferingId)
            .order_by_asc(entity::exam_result::Column::RollNo)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ExamResult::from_entity).collect())
    }
}
