use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchDto {
    pub branch_code: String,
    pub branch_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDto {
    pub subject_code: String,
    pub subject_name: String,
}

/// Teacher without any credential material.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSummaryDto {
    #[serde(rename = "teacherID")]
    pub teacher_id: String,
    pub teacher_name: String,
}

/// A student row with its branch, as listed to teachers and admins.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecordDto {
    pub roll_no: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub branch_code: String,
    pub branch: Option<BranchDto>,
}
