use super::*;

/// Tests loading offerings by ID.
///
/// Verifies stored credits are returned as text and parse through `credits_value`.
///
/// Expected: Ok(vec) with the requested offering
#[tokio::test]
async fn loads_requested_offerings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let branch = factory::create_branch(db).await?;
    let subject = factory::create_subject(db).await?;
    let teacher = factory::create_teacher(db).await?;
    let offering = factory::subject_offering::SubjectOfferingFactory::new(
        db,
        &subject.subject_code,
        &branch.branch_code,
        &teacher.teacher_id,
    )
    .credits("3")
    .build()
    .await?;
    factory::create_offering(db, &subject.subject_code, &branch.branch_code, &teacher.teacher_id)
        .await?;

    let repo = OfferingRepository::new(db);
    let offerings = repo
        .get_by_ids(&[offering.offering_id.clone(), "OFF-missing".to_string()])
        .await?;

    assert_eq!(offerings.len(), 1);
    assert_eq!(offerings[0].credits, "3");
    assert_eq!(offerings[0].credits_value(), 3.0);
    assert_eq!(offerings[0].assigned_teacher_id, teacher.teacher_id);

    Ok(())
}
