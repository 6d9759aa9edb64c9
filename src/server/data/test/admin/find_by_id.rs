use super::*;

/// Tests finding an admin by ID.
///
/// Expected: Ok(Some(Admin)) with matching username
#[tokio::test]
async fn finds_existing_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin::AdminFactory::new(db)
        .admin_id("A1")
        .username("registrar")
        .build()
        .await?;

    let repo = AdminRepository::new(db);
    let admin = repo.find_by_id("A1").await?;

    assert_eq!(admin.map(|a| a.username), Some("registrar".to_string()));

    Ok(())
}

/// Tests querying an admin ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db).await?;

    let repo = AdminRepository::new(db);

    assert!(repo.find_by_id("A-missing").await?.is_none());

    Ok(())
}
