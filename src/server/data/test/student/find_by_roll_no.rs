use super::*;

/// Tests finding a student by roll number.
///
/// Verifies the stored credential is a hash of the date of birth while the date of
/// birth itself stays readable.
///
/// Expected: Ok(Some(Student)) with matching fields
#[tokio::test]
async fn finds_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Branch)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let branch = factory::create_branch(db).await?;
    factory::student::StudentFactory::new(db, &branch.branch_code)
        .roll_no("2024UCM2376")
        .first_name("Asha")
        .date_of_birth("20040115")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let student = repo.find_by_roll_no("2024UCM2376").await?.unwrap();

    assert_eq!(student.first_name, "Asha");
    assert_eq!(student.date_of_birth, "20040115");
    assert_eq!(student.branch_code, branch.branch_code);
    assert!(student.credential_hash.starts_with("$argon2id$"));

    Ok(())
}

/// Tests that roll numbers are matched exactly.
///
/// Expected: Ok(None) for a lowercased roll number
#[tokio::test]
async fn roll_number_match_is_exact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Branch)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let branch = factory::create_branch(db).await?;
    factory::student::StudentFactory::new(db, &branch.branch_code)
        .roll_no("2024UCM2376")
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    assert!(repo.find_by_roll_no("2024ucm2376").await?.is_none());

    Ok(())
}
