//! Teacher data repository.
//!
//! Returns `Teacher` domain models including the stored password hash; callers strip the
//! hash when converting to DTOs.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::teacher::Teacher;

/// Repository providing read access to teacher accounts.
pub struct TeacherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherRepository<'a> {
    /// Creates a new TeacherRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TeacherRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a teacher by their teacher ID.
    ///
    /// # Arguments
    /// - `teacher_id` - Primary key of the teacher, matched exactly
    ///
    /// # Returns
    /// - `Ok(Some(Teacher))` - Teacher found
    /// - `Ok(None)` - No teacher with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, teacher_id: &str) -> Result<Option<Teacher>, DbErr> {
        let entity = entity::prelude::Teacher::find_by_id(teacher_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Teacher::from_entity))
    }

    /// Gets all teachers ordered by teacher ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Teacher>)` - Every teacher account
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Teacher>, DbErr> {
        let entities = entity::prelude::Teacher::find()
            .order_by_asc(entity::teacher::Column::TeacherId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Teacher::from_entity).collect())
    }
}
