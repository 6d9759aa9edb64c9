use super::*;

/// Tests an unknown sort order.
///
/// Expected: 400 with a JSON error body
#[tokio::test]
async fn rejects_unknown_sort_with_json_error() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    AuthSession::new(session).login(Role::Teacher, "T001").await?;

    let response = get_teacher_dashboard(
        State(app_state(db)),
        session.clone(),
        query::<TeacherDashboardQuery>("/api/teacher/dashboard?sort=bogus"),
    )
    .await
    .into_response();
    let (status, body) = read(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], INVALID_SORT_MESSAGE);

    Ok(())
}

/// Tests the dashboard sorted by total marks.
///
/// Expected: 200 with the offering's results highest first
#[tokio::test]
async fn sorts_results_by_total_marks() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let branch = factory::create_branch(db).await?;
    let subject = factory::create_subject(db).await?;
    let teacher = factory::teacher::TeacherFactory::new(db)
        .teacher_id("T001")
        .build()
        .await?;
    let offering = factory::create_offering(
        db,
        &subject.subject_code,
        &branch.branch_code,
        &teacher.teacher_id,
    )
    .await?;
    for (roll_no, total) in [("2024UCM0001", "50"), ("2024UCM0002", "90")] {
        factory::student::StudentFactory::new(db, &branch.branch_code)
            .roll_no(roll_no)
            .build()
            .await?;
        factory::exam_result::ExamResultFactory::new(db, roll_no, &offering.offering_id)
            .total_marks(total)
            .build()
            .await?;
    }
    AuthSession::new(session).login(Role::Teacher, "T001").await?;

    let response = get_teacher_dashboard(
        State(app_state(db)),
        session.clone(),
        query::<TeacherDashboardQuery>("/api/teacher/dashboard?sort=totalMarks"),
    )
    .await
    .into_response();
    let (status, body) = read(response).await;

    assert_eq!(status, StatusCode::OK);
    let results = &body["subjectOfferings"][0]["results"];
    assert_eq!(results[0]["totalMarks"], "90");
    assert_eq!(results[1]["totalMarks"], "50");

    Ok(())
}
