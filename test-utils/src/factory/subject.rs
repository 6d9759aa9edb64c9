//! Subject factory for creating test subject entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subjects with customizable fields.
pub struct SubjectFactory<'a> {
    db: &'a DatabaseConnection,
    subject_code: String,
    subject_name: String,
}

impl<'a> SubjectFactory<'a> {
    /// Creates a new SubjectFactory with default values.
    ///
    /// Defaults:
    /// - subject_code: `"SUB{id}"`
    /// - subject_name: `"Subject {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            subject_code: format!("SUB{}", id),
            subject_name: format!("Subject {}", id),
        }
    }

    pub fn subject_code(mut self, subject_code: impl Into<String>) -> Self {
        self.subject_code = subject_code.into();
        self
    }

    pub fn subject_name(mut self, subject_name: impl Into<String>) -> Self {
        self.subject_name = subject_name.into();
        self
    }

    /// Builds and inserts the subject entity into the database.
    pub async fn build(self) -> Result<entity::subject::Model, DbErr> {
        entity::subject::ActiveModel {
            subject_code: ActiveValue::Set(self.subject_code),
            subject_name: ActiveValue::Set(self.subject_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subject with default values.
pub async fn create_subject(db: &DatabaseConnection) -> Result<entity::subject::Model, DbErr> {
    SubjectFactory::new(db).build().await
}
