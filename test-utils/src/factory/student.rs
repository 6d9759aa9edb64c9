//! Student factory for creating test student entities.

use crate::factory::helpers::{hash_secret, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// The date of birth is stored both as plain data and as the hashed login credential,
/// mirroring how records are entered for real students.
///
/// # Example
///
/// ```rust,ignore
/// let student = StudentFactory::new(&db, "UCM")
///     .roll_no("2024UCM2376")
///     .date_of_birth("20040115")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    roll_no: String,
    first_name: String,
    last_name: String,
    date_of_birth: String,
    branch_code: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - roll_no: `"2024R{id}"`
    /// - first_name: `"First{id}"`, last_name: `"Last{id}"`
    /// - date_of_birth: `"20040101"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `branch_code` - Branch the student belongs to
    pub fn new(db: &'a DatabaseConnection, branch_code: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            roll_no: format!("2024R{}", id),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            date_of_birth: "20040101".to_string(),
            branch_code: branch_code.into(),
        }
    }

    pub fn roll_no(mut self, roll_no: impl Into<String>) -> Self {
        self.roll_no = roll_no.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the date of birth, which is also the student's login credential.
    pub fn date_of_birth(mut self, date_of_birth: impl Into<String>) -> Self {
        self.date_of_birth = date_of_birth.into();
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        let credential_hash = hash_secret(&self.date_of_birth)?;

        entity::student::ActiveModel {
            roll_no: ActiveValue::Set(self.roll_no),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
            credential_hash: ActiveValue::Set(credential_hash),
            branch_code: ActiveValue::Set(self.branch_code),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values in the given branch.
pub async fn create_student(
    db: &DatabaseConnection,
    branch_code: impl Into<String>,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, branch_code).build().await
}
