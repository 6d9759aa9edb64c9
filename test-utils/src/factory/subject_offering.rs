//! Subject offering factory for creating test offering entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subject offerings with customizable fields.
pub struct SubjectOfferingFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::subject_offering::Model,
}

impl<'a> SubjectOfferingFactory<'a> {
    /// Creates a new SubjectOfferingFactory with default values.
    ///
    /// Defaults:
    /// - offering_id: `"OFF{id}"`
    /// - semester: `"1"`
    /// - credits: `"4"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `subject_code` - Subject being offered
    /// - `branch_code` - Branch the offering is for
    /// - `teacher_id` - Assigned teacher
    pub fn new(
        db: &'a DatabaseConnection,
        subject_code: impl Into<String>,
        branch_code: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::subject_offering::Model {
                offering_id: format!("OFF{}", id),
                subject_code: subject_code.into(),
                branch_code: branch_code.into(),
                semester: "1".to_string(),
                credits: "4".to_string(),
                assigned_teacher_id: teacher_id.into(),
            },
        }
    }

    pub fn offering_id(mut self, offering_id: impl Into<String>) -> Self {
        self.entity.offering_id = offering_id.into();
        self
    }

    pub fn semester(mut self, semester: impl Into<String>) -> Self {
        self.entity.semester = semester.into();
        self
    }

    /// Sets the credits as stored text, which may be deliberately non-numeric.
    pub fn credits(mut self, credits: impl Into<String>) -> Self {
        self.entity.credits = credits.into();
        self
    }

    /// Builds and inserts the offering entity into the database.
    pub async fn build(self) -> Result<entity::subject_offering::Model, DbErr> {
        entity::subject_offering::ActiveModel {
            offering_id: ActiveValue::Set(self.entity.offering_id),
            subject_code: ActiveValue::Set(self.entity.subject_code),
            branch_code: ActiveValue::Set(self.entity.branch_code),
            semester: ActiveValue::Set(self.entity.semester),
            credits: ActiveValue::Set(self.entity.credits),
            assigned_teacher_id: ActiveValue::Set(self.entity.assigned_teacher_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an offering with default values.
pub async fn create_offering(
    db: &DatabaseConnection,
    subject_code: impl Into<String>,
    branch_code: impl Into<String>,
    teacher_id: impl Into<String>,
) -> Result<entity::subject_offering::Model, DbErr> {
    SubjectOfferingFactory::new(db, subject_code, branch_code, teacher_id)
        .build()
        .await
}
