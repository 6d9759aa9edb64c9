//! Authentication service for the three login flows.
//!
//! Each login looks up exactly one account by its identifier and verifies the supplied
//! secret against the stored salted hash. Unknown identifiers and mismatched secrets are
//! reported as distinct `AuthError`s; a corrupt stored hash is an internal error.

use sea_orm::DatabaseConnection;

use crate::{
    model::auth::Role,
    server::{
        data::{admin::AdminRepository, student::StudentRepository, teacher::TeacherRepository},
        error::{auth::AuthError, AppError},
        model::{
            admin::Admin,
            auth::{AdminLoginParam, StudentLoginParam, TeacherLoginParam},
            student::Student,
            teacher::Teacher,
        },
        service::credential::CredentialHasher,
    },
};

/// Service verifying login credentials.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    hasher: CredentialHasher,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            hasher: CredentialHasher::new(),
        }
    }

    /// Authenticates a student by roll number and date of birth.
    ///
    /// # Returns
    /// - `Ok(Student)` - Credentials verified
    /// - `Err(AppError::AuthErr(AccountNotFound))` - No student with that roll number
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Date of birth does not match
    /// - `Err(AppError::InternalErr(_))` - Stored credential hash is malformed
    /// - `Err(AppError::DbErr(_))` - Lookup failed
    pub async fn login_student(&self, param: StudentLoginParam) -> Result<Student, AppError> {
        tracing::info!("Student login attempt for {}", param.roll_no);

        let student = StudentRepository::new(self.db)
            .find_by_roll_no(&param.roll_no)
            .await?
            .ok_or_else(|| AuthError::AccountNotFound {
                role: Role::Student,
                id: param.roll_no.clone(),
            })?;

        self.verify(
            Role::Student,
            &student.roll_no,
            &param.date_of_birth,
            &student.credential_hash,
        )?;

        Ok(student)
    }

    /// Authenticates a teacher by teacher ID and password.
    ///
    /// Errors mirror [`AuthService::login_student`].
    pub async fn login_teacher(&self, param: TeacherLoginParam) -> Result<Teacher, AppError> {
        tracing::info!("Teacher login attempt for {}", param.teacher_id);

        let teacher = TeacherRepository::new(self.db)
            .find_by_id(&param.teacher_id)
            .await?
            .ok_or_else(|| AuthError::AccountNotFound {
                role: Role::Teacher,
                id: param.teacher_id.clone(),
            })?;

        self.verify(
            Role::Teacher,
            &teacher.teacher_id,
            &param.password,
            &teacher.password_hash,
        )?;

        Ok(teacher)
    }

    /// Authenticates an admin by admin ID and password.
    ///
    /// Errors mirror [`AuthService::login_student`].
    pub async fn login_admin(&self, param: AdminLoginParam) -> Result<Admin, AppError> {
        tracing::info!("Admin login attempt for {}", param.admin_id);

        let admin = AdminRepository::new(self.db)
            .find_by_id(&param.admin_id)
            .await?
            .ok_or_else(|| AuthError::AccountNotFound {
                role: Role::Admin,
                id: param.admin_id.clone(),
            })?;

        self.verify(
            Role::Admin,
            &admin.admin_id,
            &param.password,
            &admin.password_hash,
        )?;

        Ok(admin)
    }

    fn verify(&self, role: Role, id: &str, secret: &str, stored_hash: &str) -> Result<(), AppError> {
        if self.hasher.verify(role, id, secret, stored_hash)? {
            Ok(())
        } else {
            tracing::warn!("Invalid credentials for {} {}", role, id);
            Err(AuthError::InvalidCredentials {
                role,
                id: id.to_string(),
            }
            .into())
        }
    }
}
