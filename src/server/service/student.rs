//! Assembly of the student payload.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::auth::Role,
    server::{
        data::{
            branch::BranchRepository, exam_result::ExamResultRepository,
            offering::OfferingRepository, student::StudentRepository,
            subject::SubjectRepository,
        },
        error::{auth::AuthError, AppError},
        model::student::{Student, StudentProfile, StudentResult},
        util::secondary::or_empty,
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the profile of the student with `roll_no`.
    ///
    /// # Returns
    /// - `Ok(StudentProfile)` - Student with branch, results and CGPA inputs
    /// - `Err(AppError::AuthErr(AccountNotFound))` - Student no longer exists
    /// - `Err(AppError::DbErr(_))` - The student lookup itself failed
    pub async fn get_profile_by_roll_no(&self, roll_no: &str) -> Result<StudentProfile, AppError> {
        let student = StudentRepository::new(self.db)
            .find_by_roll_no(roll_no)
            .await?
            .ok_or_else(|| AuthError::AccountNotFound {
                role: Role::Student,
                id: roll_no.to_string(),
            })?;

        Ok(self.get_profile(student).await)
    }

    /// Resolves the student's branch and results.
    ///
    /// Branch and results load concurrently. Either failing is logged and leaves the
    /// field empty instead of failing the request.
    pub async fn get_profile(&self, student: Student) -> StudentProfile {
        let branch_repo = BranchRepository::new(self.db);

        let (branch, results) = tokio::join!(
            branch_repo.find_by_code(&student.branch_code),
            self.load_results(&student.roll_no)
        );

        StudentProfile {
            branch: or_empty(branch, "student branch"),
            results: or_empty(results, "student results"),
            student,
        }
    }

    async fn load_results(&self, roll_no: &str) -> Result<Vec<StudentResult>, DbErr> {
        let results = ExamResultRepository::new(self.db)
            .get_by_roll_no(roll_no)
            .await?;

        let offering_ids: Vec<String> = results.iter().map(|r| r.offering_id.clone()).collect();
        let offerings: HashMap<String, _> = OfferingRepository::new(self.db)
            .get_by_ids(&offering_ids)
            .await?
            .into_iter()
            .map(|o| (o.offering_id.clone(), o))
            .collect();

        let subject_codes: Vec<String> = offerings.values().map(|o| o.subject_code.clone()).collect();
        let subjects: HashMap<String, _> = SubjectRepository::new(self.db)
            .get_by_codes(&subject_codes)
            .await?
            .into_iter()
            .map(|s| (s.subject_code.clone(), s))
            .collect();

        Ok(results
            .into_iter()
            .map(|result| {
                let offering = offerings.get(&result.offering_id).cloned();
                let subject = offering
                    .as_ref()
                    .and_then(|o| subjects.get(&o.subject_code))
                    .cloned();

                StudentResult {
                    result,
                    offering,
                    subject,
                }
            })
            .collect())
    }
}
