use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::academic::{BranchDto, StudentRecordDto, SubjectDto, TeacherSummaryDto};

/// The complete dataset as presented to an admin.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminDto {
    #[serde(rename = "adminID")]
    pub admin_id: String,
    pub username: String,
    pub students: Vec<StudentRecordDto>,
    pub teachers: Vec<TeacherSummaryDto>,
    pub branches: Vec<BranchDto>,
    pub subjects: Vec<SubjectDto>,
    pub subject_offerings: Vec<AdminOfferingDto>,
    pub results: Vec<AdminResultDto>,
    pub branch_summaries: Vec<BranchSummaryDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminOfferingDto {
    #[serde(rename = "offeringID")]
    pub offering_id: String,
    pub subject_code: String,
    pub branch_code: String,
    pub semester: String,
    pub credits: String,
    #[serde(rename = "assignedTeacherID")]
    pub assigned_teacher_id: String,
    pub subject: Option<SubjectDto>,
    pub branch: Option<BranchDto>,
    pub teacher: Option<TeacherSummaryDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminResultDto {
    pub roll_no: String,
    #[serde(rename = "offeringID")]
    pub offering_id: String,
    pub theory_marks: String,
    pub internal_marks: String,
    pub total_marks: String,
    pub grade_point: String,
    pub status: String,
    pub student: Option<AdminResultStudentDto>,
    pub offering: Option<AdminResultOfferingDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminResultStudentDto {
    pub roll_no: String,
    pub first_name: String,
    pub last_name: String,
    pub branch: Option<BranchDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminResultOfferingDto {
    #[serde(rename = "offeringID")]
    pub offering_id: String,
    pub subject: Option<SubjectDto>,
    pub branch: Option<BranchDto>,
}

/// Per-branch head counts shown on the admin overview.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchSummaryDto {
    pub branch_code: String,
    pub branch_name: String,
    pub student_count: usize,
    pub offering_count: usize,
}
