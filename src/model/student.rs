use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::academic::{BranchDto, SubjectDto};

/// Everything a student sees after signing in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub roll_no: String,
    pub first_name: String,
    pub last_name: String,
    pub branch_code: String,
    pub branch: Option<BranchDto>,
    pub results: Vec<StudentResultDto>,
    /// Two decimal places, `"0.00"` without credits.
    #[schema(example = "7.33")]
    pub cgpa: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResultDto {
    pub offering: StudentResultOfferingDto,
    pub theory_marks: String,
    pub internal_marks: String,
    pub total_marks: String,
    /// Parsed grade point, `0` when the stored value is not numeric.
    pub grade_point: f64,
    pub status: String,
    /// Parsed credits, `0` when the stored value is not numeric.
    pub credits: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResultOfferingDto {
    #[serde(rename = "offeringID")]
    pub offering_id: String,
    pub subject: SubjectDto,
    pub semester: String,
    pub credits: String,
}
