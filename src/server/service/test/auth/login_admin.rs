use super::*;

fn param(admin_id: &str, password: &str) -> AdminLoginParam {
    AdminLoginParam::from_dto(AdminLoginDto {
        admin_id: Some(admin_id.to_string()),
        password: Some(password.to_string()),
    })
    .unwrap()
}

/// Tests an admin login with the correct password.
///
/// Expected: Ok(Admin)
#[tokio::test]
async fn accepts_matching_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin::AdminFactory::new(db)
        .admin_id("A1")
        .password("registrar-pass")
        .build()
        .await?;

    let admin = AuthService::new(db)
        .login_admin(param("A1", "registrar-pass"))
        .await?;

    assert_eq!(admin.admin_id, "A1");

    Ok(())
}

/// Tests an admin login with the wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin::AdminFactory::new(db)
        .admin_id("A1")
        .password("registrar-pass")
        .build()
        .await?;

    let result = AuthService::new(db).login_admin(param("A1", "guess")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials {
            role: Role::Admin,
            ..
        }))
    ));

    Ok(())
}

/// Tests an admin whose stored hash is not a PHC string.
///
/// A corrupt hash must surface as an internal error, not as a credential mismatch,
/// even when the supplied password equals the stored text.
///
/// Expected: Err(InternalError::MalformedCredentialHash)
#[tokio::test]
async fn malformed_hash_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin::AdminFactory::new(db)
        .admin_id("A1")
        .build_with_raw_hash("plain-text-password")
        .await?;

    let result = AuthService::new(db)
        .login_admin(param("A1", "plain-text-password"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(
            InternalError::MalformedCredentialHash { .. }
        ))
    ));

    Ok(())
}

/// Tests an admin login with an unknown admin ID.
///
/// Expected: Err(AuthError::AccountNotFound)
#[tokio::test]
async fn reports_unknown_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db).login_admin(param("A404", "pw")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountNotFound {
            role: Role::Admin,
            ..
        }))
    ));

    Ok(())
}
