//! Admin domain models and the assembled full-dataset dashboard.

use std::collections::HashMap;

use crate::{
    model::admin::{
        AdminDto, AdminOfferingDto, AdminResultDto, AdminResultOfferingDto,
        AdminResultStudentDto, BranchSummaryDto,
    },
    server::model::{
        academic::{Branch, Subject},
        exam_result::ExamResult,
        offering::SubjectOffering,
        student::StudentRecord,
        teacher::Teacher,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub admin_id: String,
    pub username: String,
    /// Argon2 PHC string; never serialized.
    pub password_hash: String,
}

impl Admin {
    pub fn from_entity(entity: entity::admin::Model) -> Self {
        Self {
            admin_id: entity.admin_id,
            username: entity.username,
            password_hash: entity.password_hash,
        }
    }
}

/// An offering with its subject, branch and assigned teacher resolved where possible.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferingRecord {
    pub offering: SubjectOffering,
    pub subject: Option<Subject>,
    pub branch: Option<Branch>,
    pub teacher: Option<Teacher>,
}

impl OfferingRecord {
    pub fn into_dto(self) -> AdminOfferingDto {
        AdminOfferingDto {
            offering_id: self.offering.offering_id,
            subject_code: self.offering.subject_code,
            branch_code: self.offering.branch_code,
            semester: self.offering.semester,
            credits: self.offering.credits,
            assigned_teacher_id: self.offering.assigned_teacher_id,
            subject: self.subject.map(Subject::into_dto),
            branch: self.branch.map(Branch::into_dto),
            teacher: self.teacher.map(Teacher::into_summary_dto),
        }
    }
}

/// A result with its student and offering, as listed and searched by admins.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminResult {
    pub result: ExamResult,
    pub student: Option<StudentRecord>,
    pub offering: Option<OfferingRecord>,
}

impl AdminResult {
    pub fn into_dto(self) -> AdminResultDto {
        AdminResultDto {
            roll_no: self.result.roll_no,
            offering_id: self.result.offering_id,
            theory_marks: self.result.theory_marks,
            internal_marks: self.result.internal_marks,
            total_marks: self.result.total_marks,
            grade_point: self.result.grade_point,
            status: self.result.status,
            student: self.student.map(|record| AdminResultStudentDto {
                roll_no: record.student.roll_no,
                first_name: record.student.first_name,
                last_name: record.student.last_name,
                branch: record.branch.map(Branch::into_dto),
            }),
            offering: self.offering.map(|record| AdminResultOfferingDto {
                offering_id: record.offering.offering_id,
                subject: record.subject.map(Subject::into_dto),
                branch: record.branch.map(Branch::into_dto),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BranchSummary {
    pub branch: Branch,
    pub student_count: usize,
    pub offering_count: usize,
}

impl BranchSummary {
    pub fn into_dto(self) -> BranchSummaryDto {
        BranchSummaryDto {
            branch_code: self.branch.branch_code,
            branch_name: self.branch.branch_name,
            student_count: self.student_count,
            offering_count: self.offering_count,
        }
    }
}

/// Everything shown to a signed-in admin.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    pub admin: Admin,
    pub students: Vec<StudentRecord>,
    pub teachers: Vec<Teacher>,
    pub branches: Vec<Branch>,
    pub subjects: Vec<Subject>,
    pub offerings: Vec<OfferingRecord>,
    pub results: Vec<AdminResult>,
}

impl AdminDashboard {
    /// Student and offering counts for every branch, in branch order.
    pub fn branch_summaries(&self) -> Vec<BranchSummary> {
        let mut students: HashMap<&str, usize> = HashMap::new();
        for record in &self.students {
            *students.entry(record.student.branch_code.as_str()).or_default() += 1;
        }

        let mut offerings: HashMap<&str, usize> = HashMap::new();
        for record in &self.offerings {
            *offerings.entry(record.offering.branch_code.as_str()).or_default() += 1;
        }

        self.branches
            .iter()
            .map(|branch| BranchSummary {
                branch: branch.clone(),
                student_count: students.get(branch.branch_code.as_str()).copied().unwrap_or(0),
                offering_count: offerings.get(branch.branch_code.as_str()).copied().unwrap_or(0),
            })
            .collect()
    }

    pub fn into_dto(self) -> AdminDto {
        let branch_summaries = self
            .branch_summaries()
            .into_iter()
            .map(BranchSummary::into_dto)
            .collect();

        AdminDto {
            admin_id: self.admin.admin_id,
            username: self.admin.username,
            students: self
                .students
                .into_iter()
                .map(StudentRecord::into_dto)
                .collect(),
            teachers: self
                .teachers
                .into_iter()
                .map(Teacher::into_summary_dto)
                .collect(),
            branches: self.branches.into_iter().map(Branch::into_dto).collect(),
            subjects: self.subjects.into_iter().map(Subject::into_dto).collect(),
            subject_offerings: self
                .offerings
                .into_iter()
                .map(OfferingRecord::into_dto)
                .collect(),
            results: self.results.into_iter().map(AdminResult::into_dto).collect(),
            branch_summaries,
        }
    }
}
