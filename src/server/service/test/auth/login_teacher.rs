use super::*;

fn param(teacher_id: &str, password: &str) -> TeacherLoginParam {
    TeacherLoginParam::from_dto(TeacherLoginDto {
        teacher_id: Some(teacher_id.to_string()),
        password: Some(password.to_string()),
    })
    .unwrap()
}

/// Tests a teacher login with the correct password.
///
/// Expected: Ok(Teacher)
#[tokio::test]
async fn accepts_matching_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::teacher::TeacherFactory::new(db)
        .teacher_id("T100")
        .password("chalk-and-talk")
        .build()
        .await?;

    let teacher = AuthService::new(db)
        .login_teacher(param("T100", "chalk-and-talk"))
        .await?;

    assert_eq!(teacher.teacher_id, "T100");

    Ok(())
}

/// Tests a teacher login with the wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::teacher::TeacherFactory::new(db)
        .teacher_id("T100")
        .password("chalk-and-talk")
        .build()
        .await?;

    let result = AuthService::new(db)
        .login_teacher(param("T100", "Chalk-and-talk"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials { .. }))
    ));

    Ok(())
}

/// Tests a teacher login with an unknown teacher ID.
///
/// Expected: Err(AuthError::AccountNotFound)
#[tokio::test]
async fn reports_unknown_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .login_teacher(param("T404", "whatever"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountNotFound {
            role: Role::Teacher,
            ..
        }))
    ));

    Ok(())
}
