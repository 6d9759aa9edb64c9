//! Teacher domain models and the assembled teacher dashboard.

use std::cmp::Reverse;

use crate::{
    model::{
        academic::TeacherSummaryDto,
        search::ResultSort,
        teacher::{OfferingResultDto, TeacherDto, TeacherOfferingDto},
    },
    server::model::{
        academic::{Branch, Subject},
        exam_result::ExamResult,
        offering::SubjectOffering,
        student::StudentRecord,
    },
};

const UNKNOWN_SUBJECT: &str = "Unknown Subject";
const UNKNOWN_BRANCH: &str = "Unknown Branch";

#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub teacher_id: String,
    pub teacher_name: String,
    /// Argon2 PHC string; never serialized.
    pub password_hash: String,
}

impl Teacher {
    pub fn from_entity(entity: entity::teacher::Model) -> Self {
        Self {
            teacher_id: entity.teacher_id,
            teacher_name: entity.teacher_name,
            password_hash: entity.password_hash,
        }
    }

    pub fn into_summary_dto(self) -> TeacherSummaryDto {
        TeacherSummaryDto {
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
        }
    }
}

/// A result in one of the teacher's offerings, with the student it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferingResult {
    pub result: ExamResult,
    pub student: Option<StudentRecord>,
}

impl OfferingResult {
    fn date_of_birth(&self) -> &str {
        self.student
            .as_ref()
            .map(|s| s.student.date_of_birth.as_str())
            .unwrap_or("")
    }

    pub fn into_dto(self) -> OfferingResultDto {
        OfferingResultDto {
            roll_no: self.result.roll_no,
            offering_id: self.result.offering_id,
            theory_marks: self.result.theory_marks,
            internal_marks: self.result.internal_marks,
            total_marks: self.result.total_marks,
            grade_point: self.result.grade_point,
            status: self.result.status,
            student: self.student.map(StudentRecord::into_dto),
        }
    }
}

/// Stable in-place sort of an offering's results.
pub fn sort_results(results: &mut [OfferingResult], sort: ResultSort) {
    match sort {
        ResultSort::RollNo => results.sort_by(|a, b| a.result.roll_no.cmp(&b.result.roll_no)),
        ResultSort::TotalMarks => results.sort_by_key(|r| Reverse(r.result.total_marks_value())),
        ResultSort::DateOfBirth => {
            results.sort_by(|a, b| a.date_of_birth().cmp(b.date_of_birth()))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeacherOffering {
    pub offering: SubjectOffering,
    pub subject: Option<Subject>,
    pub branch: Option<Branch>,
    pub results: Vec<OfferingResult>,
}

impl TeacherOffering {
    pub fn into_dto(self) -> TeacherOfferingDto {
        TeacherOfferingDto {
            subject_name: self
                .subject
                .as_ref()
                .map(|s| s.subject_name.clone())
                .unwrap_or_else(|| UNKNOWN_SUBJECT.to_string()),
            branch_name: self
                .branch
                .as_ref()
                .map(|b| b.branch_name.clone())
                .unwrap_or_else(|| UNKNOWN_BRANCH.to_string()),
            offering_id: self.offering.offering_id,
            subject_code: self.offering.subject_code,
            branch_code: self.offering.branch_code,
            semester: self.offering.semester,
            credits: self.offering.credits,
            assigned_teacher_id: self.offering.assigned_teacher_id,
            total_students: self.results.len(),
            subject: self.subject.map(Subject::into_dto),
            branch: self.branch.map(Branch::into_dto),
            results: self
                .results
                .into_iter()
                .map(OfferingResult::into_dto)
                .collect(),
        }
    }
}

/// Everything shown to a signed-in teacher.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherDashboard {
    pub teacher: Teacher,
    pub offerings: Vec<TeacherOffering>,
}

impl TeacherDashboard {
    /// Sorts the results of every offering.
    pub fn sort_results(&mut self, sort: ResultSort) {
        for offering in &mut self.offerings {
            sort_results(&mut offering.results, sort);
        }
    }

    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            teacher_id: self.teacher.teacher_id,
            teacher_name: self.teacher.teacher_name,
            subject_offerings: self
                .offerings
                .into_iter()
                .map(TeacherOffering::into_dto)
                .collect(),
        }
    }
}
