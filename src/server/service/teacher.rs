//! Assembly of the teacher payload.

use std::collections::{BTreeSet, HashMap};

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::auth::Role,
    server::{
        data::{
            branch::BranchRepository, exam_result::ExamResultRepository,
            offering::OfferingRepository, student::StudentRepository,
            subject::SubjectRepository, teacher::TeacherRepository,
        },
        error::{auth::AuthError, AppError},
        model::teacher::{OfferingResult, Teacher, TeacherDashboard, TeacherOffering},
        util::secondary::or_empty,
    },
};

pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the dashboard of the teacher with `teacher_id`.
    ///
    /// # Returns
    /// - `Ok(TeacherDashboard)` - Teacher with their offerings
    /// - `Err(AppError::AuthErr(AccountNotFound))` - Teacher no longer exists
    /// - `Err(AppError::DbErr(_))` - The teacher lookup itself failed
    pub async fn get_dashboard_by_id(&self, teacher_id: &str) -> Result<TeacherDashboard, AppError> {
        let teacher = TeacherRepository::new(self.db)
            .find_by_id(teacher_id)
            .await?
            .ok_or_else(|| AuthError::AccountNotFound {
                role: Role::Teacher,
                id: teacher_id.to_string(),
            })?;

        Ok(self.get_dashboard(teacher).await)
    }

    /// Resolves every offering assigned to the teacher.
    ///
    /// A failure while loading offerings is logged and yields an empty offering list.
    pub async fn get_dashboard(&self, teacher: Teacher) -> TeacherDashboard {
        let offerings = self.load_offerings(&teacher.teacher_id).await;

        TeacherDashboard {
            teacher,
            offerings: or_empty(offerings, "teacher offerings"),
        }
    }

    async fn load_offerings(&self, teacher_id: &str) -> Result<Vec<TeacherOffering>, DbErr> {
        let offerings = OfferingRepository::new(self.db)
            .get_by_teacher(teacher_id)
            .await?;
        if offerings.is_empty() {
            return Ok(Vec::new());
        }

        let offering_ids: Vec<String> = offerings.iter().map(|o| o.offering_id.clone()).collect();
        let subject_codes: Vec<String> = offerings
            .iter()
            .map(|o| o.subject_code.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let subject_repo = SubjectRepository::new(self.db);
        let result_repo = ExamResultRepository::new(self.db);
        let (subjects, results) = tokio::join!(
            subject_repo.get_by_codes(&subject_codes),
            result_repo.get_by_offering_ids(&offering_ids)
        );
        let subjects: HashMap<String, _> = subjects?
            .into_iter()
            .map(|s| (s.subject_code.clone(), s))
            .collect();
        let results = results?;

        let roll_nos: Vec<String> = results
            .iter()
            .map(|r| r.roll_no.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let students: HashMap<String, _> = StudentRepository::new(self.db)
            .get_by_roll_nos_with_branch(&roll_nos)
            .await?
            .into_iter()
            .map(|s| (s.student.roll_no.clone(), s))
            .collect();

        let branch_codes: Vec<String> = offerings
            .iter()
            .map(|o| o.branch_code.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let branches: HashMap<String, _> = BranchRepository::new(self.db)
            .get_by_codes(&branch_codes)
            .await?
            .into_iter()
            .map(|b| (b.branch_code.clone(), b))
            .collect();

        let mut results_by_offering: HashMap<String, Vec<OfferingResult>> = HashMap::new();
        for result in results {
            let student = students.get(&result.roll_no).cloned();
            results_by_offering
                .entry(result.offering_id.clone())
                .or_default()
                .push(OfferingResult { result, student });
        }

        Ok(offerings
            .into_iter()
            .map(|offering| TeacherOffering {
                subject: subjects.get(&offering.subject_code).cloned(),
                branch: branches.get(&offering.branch_code).cloned(),
                results: results_by_offering
                    .remove(&offering.offering_id)
                    .unwrap_or_default(),
                offering,
            })
            .collect())
    }
}
