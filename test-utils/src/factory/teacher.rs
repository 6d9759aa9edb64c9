//! Teacher factory for creating test teacher entities.

use crate::factory::helpers::{hash_secret, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default plain text password given to factory teachers.
pub const DEFAULT_TEACHER_PASSWORD: &str = "teacher-password";

/// Factory for creating test teachers with customizable fields.
///
/// The password is stored as an Argon2 hash; tests log in with the plain value.
///
/// # Example
///
/// ```rust,ignore
/// let teacher = TeacherFactory::new(&db)
///     .teacher_id("T001")
///     .password("hunter2")
///     .build()
///     .await?;
/// ```
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    teacher_id: String,
    teacher_name: String,
    password: String,
}

impl<'a> TeacherFactory<'a> {
    /// Creates a new TeacherFactory with default values.
    ///
    /// Defaults:
    /// - teacher_id: `"T{id}"`
    /// - teacher_name: `"Teacher {id}"`
    /// - password: `DEFAULT_TEACHER_PASSWORD`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            teacher_id: format!("T{}", id),
            teacher_name: format!("Teacher {}", id),
            password: DEFAULT_TEACHER_PASSWORD.to_string(),
        }
    }

    pub fn teacher_id(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_id = teacher_id.into();
        self
    }

    pub fn teacher_name(mut self, teacher_name: impl Into<String>) -> Self {
        self.teacher_name = teacher_name.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the teacher entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::teacher::Model)` - Created teacher entity
    /// - `Err(DbErr)` - Hashing or database error during insert
    pub async fn build(self) -> Result<entity::teacher::Model, DbErr> {
        entity::teacher::ActiveModel {
            teacher_id: ActiveValue::Set(self.teacher_id),
            teacher_name: ActiveValue::Set(self.teacher_name),
            password_hash: ActiveValue::Set(hash_secret(&self.password)?),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a teacher with default values.
pub async fn create_teacher(db: &DatabaseConnection) -> Result<entity::teacher::Model, DbErr> {
    TeacherFactory::new(db).build().await
}
