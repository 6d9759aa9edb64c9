use super::*;

/// Tests an unknown filter dimension.
///
/// Expected: 400 with a JSON error body
#[tokio::test]
async fn rejects_unknown_filter_with_json_error() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_academic_tables()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    AuthSession::new(session).login(Role::Admin, "A001").await?;

    let response = get_admin_dashboard(
        State(app_state(db)),
        session.clone(),
        query::<AdminDashboardQuery>("/api/admin/dashboard?search=ucm&filter=nope"),
    )
    .await
    .into_response();
    let (status, body) = read(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], INVALID_FILTER_MESSAGE);

    Ok(())
}

/// Tests the admin dashboard requested from a student session.
///
/// Expected: 403 with "Access denied"
#[tokio::test]
async fn denies_other_roles() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_academic_tables()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    AuthSession::new(session)
        .login(Role::Student, "2024UCM2376")
        .await?;

    let response = get_admin_dashboard(
        State(app_state(db)),
        session.clone(),
        query::<AdminDashboardQuery>("/api/admin/dashboard"),
    )
    .await
    .into_response();
    let (status, body) = read(response).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied");

    Ok(())
}
