//! Login parameters and the identity stored in an authenticated session.
//!
//! Login parameters are built from the request DTOs with presence validation applied,
//! so the service layer only ever sees non-empty identifiers and secrets.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::{AdminLoginDto, Role, SessionDto, StudentLoginDto, TeacherLoginDto},
    server::error::AppError,
};

/// Returns both values when each is present and non-empty.
fn require_pair(
    first: Option<String>,
    second: Option<String>,
    message: &str,
) -> Result<(String, String), AppError> {
    match (
        first.filter(|v| !v.is_empty()),
        second.filter(|v| !v.is_empty()),
    ) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

#[derive(Debug, Clone)]
pub struct StudentLoginParam {
    pub roll_no: String,
    pub date_of_birth: String,
}

impl StudentLoginParam {
    pub fn from_dto(dto: StudentLoginDto) -> Result<Self, AppError> {
        let (roll_no, date_of_birth) = require_pair(
            dto.roll_no,
            dto.date_of_birth,
            "Roll number and date of birth are required",
        )?;

        Ok(Self {
            roll_no,
            date_of_birth,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TeacherLoginParam {
    pub teacher_id: String,
    pub password: String,
}

impl TeacherLoginParam {
    pub fn from_dto(dto: TeacherLoginDto) -> Result<Self, AppError> {
        let (teacher_id, password) = require_pair(
            dto.teacher_id,
            dto.password,
            "Teacher ID and password are required",
        )?;

        Ok(Self {
            teacher_id,
            password,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AdminLoginParam {
    pub admin_id: String,
    pub password: String,
}

impl AdminLoginParam {
    pub fn from_dto(dto: AdminLoginDto) -> Result<Self, AppError> {
        let (admin_id, password) = require_pair(
            dto.admin_id,
            dto.password,
            "Admin ID and password are required",
        )?;

        Ok(Self { admin_id, password })
    }
}

/// Identity written to the session on login and validated on every read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionIdentity {
    pub role: Role,
    pub id: String,
    pub authenticated_at: DateTime<Utc>,
}

impl SessionIdentity {
    pub fn new(role: Role, id: impl Into<String>, authenticated_at: DateTime<Utc>) -> Self {
        Self {
            role,
            id: id.into(),
            authenticated_at,
        }
    }

    /// Rejects identities that could not have been written by a login.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("identity has an empty id".to_string());
        }
        if self.authenticated_at > now {
            return Err(format!(
                "identity authenticated in the future at {}",
                self.authenticated_at
            ));
        }
        Ok(())
    }

    /// Saturates at the latest representable instant instead of overflowing.
    pub fn expires_at(&self, max_age: Duration) -> DateTime<Utc> {
        self.authenticated_at
            .checked_add_signed(max_age)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now >= self.expires_at(max_age)
    }

    pub fn into_dto(self, max_age: Duration) -> SessionDto {
        SessionDto {
            expires_at: self.expires_at(max_age),
            role: self.role,
            id: self.id,
            authenticated_at: self.authenticated_at,
        }
    }
}
