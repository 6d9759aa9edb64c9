use super::*;

/// Tests finding a branch by its code.
///
/// Expected: Ok(Some(Branch)) with the stored name
#[tokio::test]
async fn finds_existing_branch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Branch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::branch::BranchFactory::new(db)
        .branch_code("UCM")
        .branch_name("Mathematics and Computing")
        .build()
        .await?;

    let repo = BranchRepository::new(db);
    let branch = repo.find_by_code("UCM").await?;

    assert!(branch.is_some());
    assert_eq!(branch.unwrap().branch_name, "Mathematics and Computing");

    Ok(())
}

/// Tests that branch codes are matched exactly.
///
/// Expected: Ok(None) for a code differing only in case
#[tokio::test]
async fn code_match_is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Branch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::branch::BranchFactory::new(db)
        .branch_code("UCM")
        .build()
        .await?;

    let repo = BranchRepository::new(db);

    assert!(repo.find_by_code("ucm").await?.is_none());

    Ok(())
}
