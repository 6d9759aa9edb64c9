use super::*;

/// Tests loading a set of branches by code.
///
/// Verifies that only requested branches are returned, unknown codes are skipped
/// and the result is ordered by branch code.
///
/// Expected: Ok(vec) with the two requested branches
#[tokio::test]
async fn returns_requested_branches_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Branch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for code in ["UEC", "UCM", "UME"] {
        factory::branch::BranchFactory::new(db)
            .branch_code(code)
            .build()
            .await?;
    }

    let repo = BranchRepository::new(db);
    let branches = repo
        .get_by_codes(&["UME".to_string(), "UCM".to_string(), "XYZ".to_string()])
        .await?;

    let codes: Vec<&str> = branches.iter().map(|b| b.branch_code.as_str()).collect();
    assert_eq!(codes, vec!["UCM", "UME"]);

    Ok(())
}

/// Tests that an empty code list yields no branches.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn empty_codes_return_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Branch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_branch(db).await?;

    let repo = BranchRepository::new(db);

    assert!(repo.get_by_codes(&[]).await?.is_empty());

    Ok(())
}
