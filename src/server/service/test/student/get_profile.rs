use super::*;

/// Tests assembling a profile with two graded results.
///
/// Verifies the branch and each result's offering and subject are resolved and the
/// CGPA is weighted by credits.
///
/// Expected: Ok(StudentProfile) with CGPA "7.33"
#[tokio::test]
async fn assembles_results_and_cgpa() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let branch = factory::create_branch(db).await?;
    let teacher = factory::create_teacher(db).await?;
    let subject = factory::subject::SubjectFactory::new(db)
        .subject_code("CS201")
        .subject_name("Data Structures")
        .build()
        .await?;
    let student = factory::create_student(db, &branch.branch_code).await?;

    let four_credit = factory::subject_offering::SubjectOfferingFactory::new(
        db,
        &subject.subject_code,
        &branch.branch_code,
        &teacher.teacher_id,
    )
    .credits("4")
    .build()
    .await?;
    let two_credit = factory::subject_offering::SubjectOfferingFactory::new(
        db,
        &subject.subject_code,
        &branch.branch_code,
        &teacher.teacher_id,
    )
    .credits("2")
    .build()
    .await?;
    factory::exam_result::ExamResultFactory::new(db, &student.roll_no, &four_credit.offering_id)
        .grade_point("8")
        .build()
        .await?;
    factory::exam_result::ExamResultFactory::new(db, &student.roll_no, &two_credit.offering_id)
        .grade_point("6")
        .build()
        .await?;

    let profile = StudentService::new(db)
        .get_profile_by_roll_no(&student.roll_no)
        .await?;

    assert_eq!(profile.branch.as_ref().unwrap().branch_code, branch.branch_code);
    assert_eq!(profile.results.len(), 2);
    assert!(profile
        .results
        .iter()
        .all(|r| r.subject.as_ref().map(|s| s.subject_name.as_str()) == Some("Data Structures")));
    assert_eq!(profile.cgpa(), "7.33");

    let dto = profile.into_dto();
    assert_eq!(dto.roll_no, student.roll_no);
    assert_eq!(dto.cgpa, "7.33");

    Ok(())
}

/// Tests a student without results.
///
/// Expected: Ok(StudentProfile) with no results and CGPA "0.00"
#[tokio::test]
async fn no_results_yield_zero_cgpa() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let branch = factory::create_branch(db).await?;
    let student = factory::create_student(db, &branch.branch_code).await?;

    let profile = StudentService::new(db)
        .get_profile_by_roll_no(&student.roll_no)
        .await?;

    assert!(profile.results.is_empty());
    assert_eq!(profile.cgpa(), "0.00");

    Ok(())
}

/// Tests that a failing results query does not fail the profile.
///
/// The results and offerings tables are absent, so the secondary query errors.
///
/// Expected: Ok(StudentProfile) with an empty result list
#[tokio::test]
async fn failed_results_query_leaves_results_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Branch)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let branch = factory::create_branch(db).await?;
    let student = factory::create_student(db, &branch.branch_code).await?;

    let profile = StudentService::new(db)
        .get_profile_by_roll_no(&student.roll_no)
        .await?;

    assert!(profile.results.is_empty());
    assert!(profile.branch.is_some());

    Ok(())
}

/// Tests loading the profile of a roll number that does not exist.
///
/// Expected: Err(AppError::AuthErr)
#[tokio::test]
async fn unknown_student_is_an_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentService::new(db)
        .get_profile_by_roll_no("2024UCM0000")
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}
