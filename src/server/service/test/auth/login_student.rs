use super::*;

fn param(roll_no: &str, date_of_birth: &str) -> StudentLoginParam {
    StudentLoginParam::from_dto(StudentLoginDto {
        roll_no: Some(roll_no.to_string()),
        date_of_birth: Some(date_of_birth.to_string()),
    })
    .unwrap()
}

/// Tests a student login with the correct date of birth.
///
/// Expected: Ok(Student) with the requested roll number
#[tokio::test]
async fn accepts_matching_date_of_birth() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let branch = factory::create_branch(db).await?;
    factory::student::StudentFactory::new(db, &branch.branch_code)
        .roll_no("2024UCM2376")
        .date_of_birth("20040115")
        .build()
        .await?;

    let student = AuthService::new(db)
        .login_student(param("2024UCM2376", "20040115"))
        .await?;

    assert_eq!(student.roll_no, "2024UCM2376");

    Ok(())
}

/// Tests a student login with the wrong date of birth.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_date_of_birth() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let branch = factory::create_branch(db).await?;
    factory::student::StudentFactory::new(db, &branch.branch_code)
        .roll_no("2024UCM2376")
        .date_of_birth("20040115")
        .build()
        .await?;

    let result = AuthService::new(db)
        .login_student(param("2024UCM2376", "20040116"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials {
            role: Role::Student,
            ..
        }))
    ));

    Ok(())
}

/// Tests a student login with an unknown roll number.
///
/// Expected: Err(AuthError::AccountNotFound)
#[tokio::test]
async fn reports_unknown_roll_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .login_student(param("2024UCM0000", "20040115"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountNotFound {
            role: Role::Student,
            ..
        }))
    ));

    Ok(())
}

/// Tests that an unreachable student table surfaces as a database error.
///
/// The identity lookup is the primary query, so its failure is not masked.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn lookup_failure_is_a_database_error() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .login_student(param("2024UCM2376", "20040115"))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
