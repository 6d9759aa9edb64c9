//! Student data repository.
//!
//! Provides lookups of student rows by roll number, alone or with their branch joined,
//! and bulk loads for the teacher and admin views.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::{
    academic::Branch,
    student::{Student, StudentRecord},
};

/// Repository providing read access to student records.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a student by roll number.
    ///
    /// The roll number is matched exactly; no case folding or trimming is applied.
    ///
    /// # Arguments
    /// - `roll_no` - Primary key of the student
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that roll number
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_roll_no(&self, roll_no: &str) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(roll_no.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Gets all students with their branches, ordered by roll number.
    ///
    /// # Returns
    /// - `Ok(Vec<StudentRecord>)` - Every student
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_branch(&self) -> Result<Vec<StudentRecord>, DbErr> {
        let rows = entity::prelude::Student::find()
            .find_also_related(entity::prelude::Branch)
            .order_by_asc(entity::student::Column::RollNo)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(Self::into_record).collect())
    }

    /// Gets the students whose roll numbers appear in `roll_nos`, with their branches.
    ///
    /// Unknown roll numbers are skipped; an empty slice returns an empty list without
    /// querying.
    ///
    /// # Arguments
    /// - `roll_nos` - Roll numbers to load
    ///
    /// # Returns
    /// - `Ok(Vec<StudentRecord>)` - Matching students ordered by roll number
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_roll_nos_with_branch(
        &self,
        roll_nos: &[String],
    ) -> Result<Vec<StudentRecord>, DbErr> {
        if roll_nos.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Student::find()
            .filter(entity::student::Column::RollNo.is_in(roll_nos.iter().cloned()))
            .find_also_related(entity::prelude::Branch)
            .order_by_asc(entity::student::Column::RollNo)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(Self::into_record).collect())
    }

    fn into_record(
        (student, branch): (entity::student::Model, Option<entity::branch::Model>),
    ) -> StudentRecord {
        StudentRecord {
            student: Student::from_entity(student),
            branch: branch.map(Branch::from_entity),
        }
    }
}
