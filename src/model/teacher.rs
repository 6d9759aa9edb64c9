use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::academic::{BranchDto, StudentRecordDto, SubjectDto};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDto {
    #[serde(rename = "teacherID")]
    pub teacher_id: String,
    pub teacher_name: String,
    pub subject_offerings: Vec<TeacherOfferingDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherOfferingDto {
    #[serde(rename = "offeringID")]
    pub offering_id: String,
    pub subject_code: String,
    pub subject_name: String,
    pub branch_code: String,
    pub branch_name: String,
    pub semester: String,
    pub credits: String,
    #[serde(rename = "assignedTeacherID")]
    pub assigned_teacher_id: String,
    pub total_students: usize,
    pub subject: Option<SubjectDto>,
    pub branch: Option<BranchDto>,
    pub results: Vec<OfferingResultDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferingResultDto {
    pub roll_no: String,
    #[serde(rename = "offeringID")]
    pub offering_id: String,
    pub theory_marks: String,
    pub internal_marks: String,
    pub total_marks: String,
    pub grade_point: String,
    pub status: String,
    pub student: Option<StudentRecordDto>,
}
