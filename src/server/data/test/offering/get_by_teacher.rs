use super::*;

/// Tests loading the offerings assigned to one teacher.
///
/// Verifies that offerings of other teachers are excluded.
///
/// Expected: Ok(vec) with only the teacher's offerings ordered by offering ID
#[tokio::test]
async fn returns_only_assigned_offerings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let branch = factory::create_branch(db).await?;
    let subject = factory::create_subject(db).await?;
    let teacher = factory::create_teacher(db).await?;
    let other = factory::create_teacher(db).await?;

    for offering_id in ["OFF2", "OFF1"] {
        factory::subject_offering::SubjectOfferingFactory::new(
            db,
            &subject.subject_code,
            &branch.branch_code,
            &teacher.teacher_id,
        )
        .offering_id(offering_id)
        .build()
        .await?;
    }
    factory::subject_offering::SubjectOfferingFactory::new(
        db,
        &subject.subject_code,
        &branch.branch_code,
        &other.teacher_id,
    )
    .offering_id("OFF3")
    .build()
    .await?;

    let repo = OfferingRepository::new(db);
    let offerings = repo.get_by_teacher(&teacher.teacher_id).await?;

    let ids: Vec<&str> = offerings.iter().map(|o| o.offering_id.as_str()).collect();
    assert_eq!(ids, vec!["OFF1", "OFF2"]);

    Ok(())
}

/// Tests a teacher with no assigned offerings.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_unassigned_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;

    let repo = OfferingRepository::new(db);

    assert!(repo.get_by_teacher(&teacher.teacher_id).await?.is_empty());

    Ok(())
}
