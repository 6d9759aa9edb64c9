//! Shared helper utilities for factory methods.
//!
//! Provides ID generation, secret hashing and convenience methods for creating entities
//! together with the rows they reference.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Hashes a secret into an Argon2id PHC string with minimal cost parameters.
///
/// The parameters are encoded in the PHC string, so the server verifies these hashes with
/// the same cheap settings. Never use these parameters outside of tests.
///
/// # Arguments
/// - `secret` - Plain text secret to hash
///
/// # Returns
/// - `Ok(String)` - PHC encoded hash
/// - `Err(DbErr::Custom)` - Hashing failed
pub fn hash_secret(secret: &str) -> Result<String, DbErr> {
    let params = Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None)
        .map_err(|e| DbErr::Custom(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut salt_bytes = [0u8; 16];
    salt_bytes[..8].copy_from_slice(&next_id().to_le_bytes());
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| DbErr::Custom(e.to_string()))?;

    let hash = argon2
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| DbErr::Custom(e.to_string()))?;

    Ok(hash.to_string())
}

/// Creates a result together with every row it depends on.
///
/// Creates, with default values:
/// 1. Branch
/// 2. Subject
/// 3. Teacher
/// 4. Student (in the branch)
/// 5. Subject offering (subject, branch, teacher)
/// 6. Result (student, offering)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((branch, subject, teacher, student, offering, result))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_result_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::branch::Model,
        entity::subject::Model,
        entity::teacher::Model,
        entity::student::Model,
        entity::subject_offering::Model,
        entity::exam_result::Model,
    ),
    DbErr,
> {
    let branch = crate::factory::branch::create_branch(db).await?;
    let subject = crate::factory::subject::create_subject(db).await?;
    let teacher = crate::factory::teacher::create_teacher(db).await?;
    let student = crate::factory::student::create_student(db, &branch.branch_code).await?;
    let offering = crate::factory::subject_offering::create_offering(
        db,
        &subject.subject_code,
        &branch.branch_code,
        &teacher.teacher_id,
    )
    .await?;
    let result =
        crate::factory::exam_result::create_result(db, &student.roll_no, &offering.offering_id)
            .await?;

    Ok((branch, subject, teacher, student, offering, result))
}
