use super::*;

/// Tests finding a teacher by ID.
///
/// Verifies the stored password hash is returned rather than the plain password.
///
/// Expected: Ok(Some(Teacher)) with a PHC hash
#[tokio::test]
async fn finds_teacher_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::teacher::TeacherFactory::new(db)
        .teacher_id("T100")
        .teacher_name("Dr. Rao")
        .password("chalk-and-talk")
        .build()
        .await?;

    let repo = TeacherRepository::new(db);
    let teacher = repo.find_by_id("T100").await?.unwrap();

    assert_eq!(teacher.teacher_name, "Dr. Rao");
    assert!(teacher.password_hash.starts_with("$argon2id$"));
    assert_ne!(teacher.password_hash, "chalk-and-talk");

    Ok(())
}

/// Tests querying a teacher ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);

    assert!(repo.find_by_id("T404").await?.is_none());

    Ok(())
}
