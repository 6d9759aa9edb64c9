use super::*;

/// Tests reading the session after a successful student login.
///
/// Expected: 200 with the student's role and roll number
#[tokio::test]
async fn reports_identity_after_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let branch = factory::create_branch(db).await?;
    factory::student::StudentFactory::new(db, &branch.branch_code)
        .roll_no("2024UCM2376")
        .build()
        .await?;

    let login = student_login(
        State(app_state(db)),
        session.clone(),
        json_body::<StudentLoginDto>(r#"{"rollNo":"2024UCM2376","dateOfBirth":"20040101"}"#)
            .await,
    )
    .await
    .into_response();
    assert_eq!(login.status(), StatusCode::OK);

    let response = get_session(State(app_state(db)), session.clone())
        .await
        .into_response();
    let (status, body) = read(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "student");
    assert_eq!(body["id"], "2024UCM2376");

    Ok(())
}

/// Tests reading the session after logging out.
///
/// Expected: 204 from logout, then 401 with "Please login first"
#[tokio::test]
async fn logout_ends_the_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (status, _) = read(logout(session.clone()).await.into_response()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let response = get_session(State(app_state(db)), session.clone())
        .await
        .into_response();
    let (status, body) = read(response).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Please login first");

    Ok(())
}
