use super::*;

/// Tests reading back the identity written by a login.
///
/// Expected: Ok(Some(SessionIdentity)) equal to the one returned by `login`
#[tokio::test]
async fn returns_identity_written_by_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let auth_session = AuthSession::new(session);

    let written = auth_session.login(Role::Admin, "A1").await?;
    let read = auth_session.identity().await?;

    assert_eq!(read, Some(written));

    Ok(())
}

/// Tests a stored value that is not a session identity.
///
/// Verifies the session is cleared so the bad value is not read again.
///
/// Expected: Err(AuthError::InvalidSession), then Ok(None)
#[tokio::test]
async fn discards_malformed_identity() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let auth_session = AuthSession::new(session);

    auth_session
        .store_raw(json!({ "role": "superuser", "id": "root" }))
        .await?;

    assert!(matches!(
        auth_session.identity().await,
        Err(AppError::AuthErr(AuthError::InvalidSession(_)))
    ));
    assert!(auth_session.identity().await?.is_none());

    Ok(())
}

/// Tests an identity with an empty id.
///
/// Expected: Err(AuthError::InvalidSession)
#[tokio::test]
async fn rejects_identity_with_empty_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let auth_session = AuthSession::new(session);

    auth_session
        .store_raw(json!({
            "role": "student",
            "id": "",
            "authenticated_at": "2026-01-01T00:00:00Z",
        }))
        .await?;

    assert!(matches!(
        auth_session.identity().await,
        Err(AppError::AuthErr(AuthError::InvalidSession(_)))
    ));

    Ok(())
}

/// Tests that clearing removes the identity.
///
/// Expected: Ok(None) after clear
#[tokio::test]
async fn clear_logs_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let auth_session = AuthSession::new(session);

    auth_session.login(Role::Student, "2024UCM2376").await?;
    auth_session.clear().await?;

    assert!(auth_session.identity().await?.is_none());

    Ok(())
}
