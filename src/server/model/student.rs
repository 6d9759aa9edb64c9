//! Student domain models.
//!
//! A `Student` carries the stored credential hash and never leaves the server as-is;
//! `StudentRecord` is the view other roles see and `StudentProfile` is the assembled
//! payload a student receives after signing in.

use crate::{
    model::{
        academic::{StudentRecordDto, SubjectDto},
        student::{StudentDto, StudentResultDto, StudentResultOfferingDto},
    },
    server::model::{
        academic::{Branch, Subject},
        cgpa::Cgpa,
        exam_result::ExamResult,
        offering::SubjectOffering,
    },
};

const UNRESOLVED_TEXT: &str = "N/A";
const UNRESOLVED_NUMBER: &str = "0";

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub roll_no: String,
    pub first_name: String,
    pub last_name: String,
    /// `YYYYMMDD`
    pub date_of_birth: String,
    pub branch_code: String,
    /// Argon2 PHC string of the date-of-birth credential.
    pub credential_hash: String,
}

impl Student {
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            roll_no: entity.roll_no,
            first_name: entity.first_name,
            last_name: entity.last_name,
            date_of_birth: entity.date_of_birth,
            branch_code: entity.branch_code,
            credential_hash: entity.credential_hash,
        }
    }
}

/// A student together with their resolved branch.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub student: Student,
    pub branch: Option<Branch>,
}

impl StudentRecord {
    pub fn into_dto(self) -> StudentRecordDto {
        StudentRecordDto {
            roll_no: self.student.roll_no,
            first_name: self.student.first_name,
            last_name: self.student.last_name,
            date_of_birth: self.student.date_of_birth,
            branch_code: self.student.branch_code,
            branch: self.branch.map(Branch::into_dto),
        }
    }
}

/// One of the student's results with its offering and subject, either of which may be
/// unresolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentResult {
    pub result: ExamResult,
    pub offering: Option<SubjectOffering>,
    pub subject: Option<Subject>,
}

impl StudentResult {
    pub fn credits(&self) -> f64 {
        self.offering
            .as_ref()
            .map(SubjectOffering::credits_value)
            .unwrap_or(0.0)
    }

    pub fn into_dto(self) -> StudentResultDto {
        let credits = self.credits();
        let grade_point = self.result.grade_point_value();

        let subject = self
            .subject
            .map(Subject::into_dto)
            .unwrap_or_else(|| SubjectDto {
                subject_code: UNRESOLVED_TEXT.to_string(),
                subject_name: UNRESOLVED_TEXT.to_string(),
            });

        let (semester, credits_text) = match self.offering {
            Some(offering) => (offering.semester, offering.credits),
            None => (UNRESOLVED_TEXT.to_string(), UNRESOLVED_NUMBER.to_string()),
        };

        StudentResultDto {
            offering: StudentResultOfferingDto {
                offering_id: self.result.offering_id,
                subject,
                semester,
                credits: credits_text,
            },
            theory_marks: self.result.theory_marks,
            internal_marks: self.result.internal_marks,
            total_marks: self.result.total_marks,
            grade_point,
            status: self.result.status,
            credits,
        }
    }
}

/// Everything shown to a signed-in student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub student: Student,
    pub branch: Option<Branch>,
    pub results: Vec<StudentResult>,
}

impl StudentProfile {
    pub fn cgpa(&self) -> String {
        self.results
            .iter()
            .map(|r| (r.credits(), r.result.grade_point_value()))
            .collect::<Cgpa>()
            .format()
    }

    pub fn into_dto(self) -> StudentDto {
        let cgpa = self.cgpa();

        StudentDto {
            roll_no: self.student.roll_no,
            first_name: self.student.first_name,
            last_name: self.student.last_name,
            branch_code: self.student.branch_code,
            branch: self.branch.map(Branch::into_dto),
            results: self
                .results
                .into_iter()
                .map(StudentResult::into_dto)
                .collect(),
            cgpa,
        }
    }
}
