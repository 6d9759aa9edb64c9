//! Assembly of the admin payload.
//!
//! The admin view is the entire dataset. All six tables load concurrently and are joined
//! in memory; any table that fails to load is logged and treated as empty so the admin
//! can still sign in.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::auth::Role,
    server::{
        data::{
            admin::AdminRepository, branch::BranchRepository, exam_result::ExamResultRepository,
            offering::OfferingRepository, student::StudentRepository,
            subject::SubjectRepository, teacher::TeacherRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            academic::{Branch, Subject},
            admin::{Admin, AdminDashboard, AdminResult, OfferingRecord},
            exam_result::ExamResult,
            offering::SubjectOffering,
            student::StudentRecord,
            teacher::Teacher,
        },
        util::secondary::or_empty,
    },
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the dashboard of the admin with `admin_id`.
    ///
    /// # Returns
    /// - `Ok(AdminDashboard)` - Admin with the full dataset
    /// - `Err(AppError::AuthErr(AccountNotFound))` - Admin no longer exists
    /// - `Err(AppError::DbErr(_))` - The admin lookup itself failed
    pub async fn get_dashboard_by_id(&self, admin_id: &str) -> Result<AdminDashboard, AppError> {
        let admin = AdminRepository::new(self.db)
            .find_by_id(admin_id)
            .await?
            .ok_or_else(|| AuthError::AccountNotFound {
                role: Role::Admin,
                id: admin_id.to_string(),
            })?;

        Ok(self.get_dashboard(admin).await)
    }

    pub async fn get_dashboard(&self, admin: Admin) -> AdminDashboard {
        let branch_repo = BranchRepository::new(self.db);
        let subject_repo = SubjectRepository::new(self.db);
        let teacher_repo = TeacherRepository::new(self.db);
        let student_repo = StudentRepository::new(self.db);
        let offering_repo = OfferingRepository::new(self.db);
        let result_repo = ExamResultRepository::new(self.db);

        let (branches, subjects, teachers, students, offerings, results) = tokio::join!(
            branch_repo.get_all(),
            subject_repo.get_all(),
            teacher_repo.get_all(),
            student_repo.get_all_with_branch(),
            offering_repo.get_all(),
            result_repo.get_all()
        );

        let branches = or_empty(branches, "branches");
        let subjects = or_empty(subjects, "subjects");
        let teachers = or_empty(teachers, "teachers");
        let students = or_empty(students, "students");
        let offerings = or_empty(offerings, "subject offerings");
        let results = or_empty(results, "results");

        let offerings = join_offerings(offerings, &branches, &subjects, &teachers);
        let results = join_results(results, &students, &offerings);

        AdminDashboard {
            admin,
            students,
            teachers,
            branches,
            subjects,
            offerings,
            results,
        }
    }
}

fn join_offerings(
    offerings: Vec<SubjectOffering>,
    branches: &[Branch],
    subjects: &[Subject],
    teachers: &[Teacher],
) -> Vec<OfferingRecord> {
    let branch_by_code: HashMap<&str, &Branch> = branches
        .iter()
        .map(|b| (b.branch_code.as_str(), b))
        .collect();
    let subject_by_code: HashMap<&str, &Subject> = subjects
        .iter()
        .map(|s| (s.subject_code.as_str(), s))
        .collect();
    let teacher_by_id: HashMap<&str, &Teacher> = teachers
        .iter()
        .map(|t| (t.teacher_id.as_str(), t))
        .collect();

    offerings
        .into_iter()
        .map(|offering| OfferingRecord {
            subject: subject_by_code
                .get(offering.subject_code.as_str())
                .map(|s| (*s).clone()),
            branch: branch_by_code
                .get(offering.branch_code.as_str())
                .map(|b| (*b).clone()),
            teacher: teacher_by_id
                .get(offering.assigned_teacher_id.as_str())
                .map(|t| (*t).clone()),
            offering,
        })
        .collect()
}

fn join_results(
    results: Vec<ExamResult>,
    students: &[StudentRecord],
    offerings: &[OfferingRecord],
) -> Vec<AdminResult> {
    let student_by_roll: HashMap<&str, &StudentRecord> = students
        .iter()
        .map(|s| (s.student.roll_no.as_str(), s))
        .collect();
    let offering_by_id: HashMap<&str, &OfferingRecord> = offerings
        .iter()
        .map(|o| (o.offering.offering_id.as_str(), o))
        .collect();

    results
        .into_iter()
        .map(|result| AdminResult {
            student: student_by_roll
                .get(result.roll_no.as_str())
                .map(|s| (*s).clone()),
            offering: offering_by_id
                .get(result.offering_id.as_str())
                .map(|o| (*o).clone()),
            result,
        })
        .collect()
}
