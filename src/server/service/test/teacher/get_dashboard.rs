use super::*;

/// Tests assembling a teacher dashboard with one offering and two results.
///
/// Verifies subject and branch resolution, the result count and that every result
/// carries its student and the student's branch.
///
/// Expected: Ok(TeacherDashboard) with one populated offering
#[tokio::test]
async fn assembles_offerings_with_results() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let branch = factory::create_branch(db).await?;
    let subject = factory::create_subject(db).await?;
    let teacher = factory::create_teacher(db).await?;
    let other_teacher = factory::create_teacher(db).await?;
    let offering = factory::create_offering(
        db,
        &subject.subject_code,
        &branch.branch_code,
        &teacher.teacher_id,
    )
    .await?;
    factory::create_offering(
        db,
        &subject.subject_code,
        &branch.branch_code,
        &other_teacher.teacher_id,
    )
    .await?;

    let low = factory::student::StudentFactory::new(db, &branch.branch_code)
        .roll_no("R1")
        .build()
        .await?;
    let high = factory::student::StudentFactory::new(db, &branch.branch_code)
        .roll_no("R2")
        .build()
        .await?;
    factory::exam_result::ExamResultFactory::new(db, &low.roll_no, &offering.offering_id)
        .total_marks("50")
        .build()
        .await?;
    factory::exam_result::ExamResultFactory::new(db, &high.roll_no, &offering.offering_id)
        .total_marks("90")
        .build()
        .await?;

    let mut dashboard = TeacherService::new(db)
        .get_dashboard_by_id(&teacher.teacher_id)
        .await?;

    assert_eq!(dashboard.offerings.len(), 1);
    let assembled = &dashboard.offerings[0];
    assert_eq!(assembled.offering.offering_id, offering.offering_id);
    assert_eq!(assembled.subject.as_ref().unwrap().subject_code, subject.subject_code);
    assert_eq!(assembled.branch.as_ref().unwrap().branch_code, branch.branch_code);
    assert_eq!(assembled.results.len(), 2);
    assert!(assembled
        .results
        .iter()
        .all(|r| r.student.as_ref().is_some_and(|s| s.branch.is_some())));

    dashboard.sort_results(ResultSort::TotalMarks);
    let dto = dashboard.into_dto();
    let offering_dto = &dto.subject_offerings[0];
    assert_eq!(offering_dto.total_students, 2);
    let marks: Vec<&str> = offering_dto
        .results
        .iter()
        .map(|r| r.total_marks.as_str())
        .collect();
    assert_eq!(marks, vec!["90", "50"]);

    Ok(())
}

/// Tests a teacher without assigned offerings.
///
/// Expected: Ok(TeacherDashboard) with no offerings
#[tokio::test]
async fn teacher_without_offerings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;

    let dashboard = TeacherService::new(db)
        .get_dashboard_by_id(&teacher.teacher_id)
        .await?;

    assert!(dashboard.offerings.is_empty());
    assert_eq!(dashboard.into_dto().teacher_id, teacher.teacher_id);

    Ok(())
}

/// Tests that a failing offerings query does not fail the dashboard.
///
/// Only the teacher table exists, so loading offerings errors.
///
/// Expected: Ok(TeacherDashboard) with no offerings
#[tokio::test]
async fn failed_offerings_query_leaves_offerings_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;

    let dashboard = TeacherService::new(db)
        .get_dashboard_by_id(&teacher.teacher_id)
        .await?;

    assert!(dashboard.offerings.is_empty());

    Ok(())
}
