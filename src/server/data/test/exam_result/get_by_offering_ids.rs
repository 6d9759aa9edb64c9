use super::*;

/// Tests loading the results of several offerings.
///
/// Expected: Ok(vec) grouped by offering ID, then roll number
#[tokio::test]
async fn returns_results_for_offerings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let branch = factory::create_branch(db).await?;
    let subject = factory::create_subject(db).await?;
    let teacher = factory::create_teacher(db).await?;
    let first = factory::subject_offering::SubjectOfferingFactory::new(
        db,
        &subject.subject_code,
        &branch.branch_code,
        &teacher.teacher_id,
    )
    .offering_id("OFF-A")
    .build()
    .await?;
    let second = factory::subject_offering::SubjectOfferingFactory::new(
        db,
        &subject.subject_code,
        &branch.branch_code,
        &teacher.teacher_id,
    )
    .offering_id("OFF-B")
    .build()
    .await?;
    let unrelated = factory::subject_offering::SubjectOfferingFactory::new(
        db,
        &subject.subject_code,
        &branch.branch_code,
        &teacher.teacher_id,
    )
    .offering_id("OFF-C")
    .build()
    .await?;

    let s1 = factory::student::StudentFactory::new(db, &branch.branch_code)
        .roll_no("R1")
        .build()
        .await?;
    let s2 = factory::student::StudentFactory::new(db, &branch.branch_code)
        .roll_no("R2")
        .build()
        .await?;

    factory::create_result(db, &s2.roll_no, &second.offering_id).await?;
    factory::create_result(db, &s1.roll_no, &second.offering_id).await?;
    factory::create_result(db, &s1.roll_no, &first.offering_id).await?;
    factory::create_result(db, &s1.roll_no, &unrelated.offering_id).await?;

    let repo = ExamResultRepository::new(db);
    let results = repo
        .get_by_offering_ids(&[first.offering_id.clone(), second.offering_id.clone()])
        .await?;

    let keys: Vec<(&str, &str)> = results
        .iter()
        .map(|r| (r.offering_id.as_str(), r.roll_no.as_str()))
        .collect();
    assert_eq!(keys, vec![("OFF-A", "R1"), ("OFF-B", "R1"), ("OFF-B", "R2")]);

    Ok(())
}
