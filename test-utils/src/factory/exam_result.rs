//! Result factory for creating test exam result entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test results with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let result = ExamResultFactory::new(&db, "2024UCM2376", "OFF1")
///     .total_marks("90")
///     .grade_point("9")
///     .build()
///     .await?;
/// ```
pub struct ExamResultFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::exam_result::Model,
}

impl<'a> ExamResultFactory<'a> {
    /// Creates a new ExamResultFactory with default values.
    ///
    /// Defaults:
    /// - theory_marks: `"60"`, internal_marks: `"20"`, total_marks: `"80"`
    /// - grade_point: `"8"`
    /// - status: `"Pass"`
    pub fn new(
        db: &'a DatabaseConnection,
        roll_no: impl Into<String>,
        offering_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            entity: entity::exam_result::Model {
                roll_no: roll_no.into(),
                offering_id: offering_id.into(),
                theory_marks: "60".to_string(),
                internal_marks: "20".to_string(),
                total_marks: "80".to_string(),
                grade_point: "8".to_string(),
                status: "Pass".to_string(),
            },
        }
    }

    pub fn theory_marks(mut self, theory_marks: impl Into<String>) -> Self {
        self.entity.theory_marks = theory_marks.into();
        self
    }

    pub fn internal_marks(mut self, internal_marks: impl Into<String>) -> Self {
        self.entity.internal_marks = internal_marks.into();
        self
    }

    pub fn total_marks(mut self, total_marks: impl Into<String>) -> Self {
        self.entity.total_marks = total_marks.into();
        self
    }

    pub fn grade_point(mut self, grade_point: impl Into<String>) -> Self {
        self.entity.grade_point = grade_point.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    /// Builds and inserts the result entity into the database.
    pub async fn build(self) -> Result<entity::exam_result::Model, DbErr> {
        entity::exam_result::ActiveModel {
            roll_no: ActiveValue::Set(self.entity.roll_no),
            offering_id: ActiveValue::Set(self.entity.offering_id),
            theory_marks: ActiveValue::Set(self.entity.theory_marks),
            internal_marks: ActiveValue::Set(self.entity.internal_marks),
            total_marks: ActiveValue::Set(self.entity.total_marks),
            grade_point: ActiveValue::Set(self.entity.grade_point),
            status: ActiveValue::Set(self.entity.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a result with default values.
pub async fn create_result(
    db: &DatabaseConnection,
    roll_no: impl Into<String>,
    offering_id: impl Into<String>,
) -> Result<entity::exam_result::Model, DbErr> {
    ExamResultFactory::new(db, roll_no, offering_id).build().await
}
