use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::model::{admin::AdminDto, student::StudentDto, teacher::TeacherDto};

/// Message returned with every successful login.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// The three kinds of account that can sign in to the portal.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Capitalized role name for client-facing messages such as "Student not found".
    pub fn title(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        };
        f.write_str(name)
    }
}

/// Student credentials. Absent, `null` and empty fields are rejected with 400.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentLoginDto {
    #[schema(example = "2024UCM2376")]
    pub roll_no: Option<String>,
    /// `YYYYMMDD`
    #[schema(example = "20040115")]
    pub date_of_birth: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct TeacherLoginDto {
    #[serde(rename = "teacherID")]
    pub teacher_id: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct AdminLoginDto {
    #[serde(rename = "adminID")]
    pub admin_id: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct StudentLoginResponseDto {
    pub message: String,
    pub student: StudentDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct TeacherLoginResponseDto {
    pub message: String,
    pub teacher: TeacherDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AdminLoginResponseDto {
    pub message: String,
    pub admin: AdminDto,
}

/// The identity held by the caller's session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub role: Role,
    pub id: String,
    pub authenticated_at: DateTime<Utc>,
    /// Absolute expiry; the session may end earlier through inactivity.
    pub expires_at: DateTime<Utc>,
}
