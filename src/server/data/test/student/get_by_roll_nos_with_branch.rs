use super::*;

/// Tests bulk loading students by roll number.
///
/// Verifies that students outside the requested set are excluded and each record
/// carries its branch.
///
/// Expected: Ok(vec) with the requested students ordered by roll number
#[tokio::test]
async fn loads_requested_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Branch)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let branch = factory::create_branch(db).await?;
    for roll_no in ["R3", "R1", "R2"] {
        factory::student::StudentFactory::new(db, &branch.branch_code)
            .roll_no(roll_no)
            .build()
            .await?;
    }

    let repo = StudentRepository::new(db);
    let records = repo
        .get_by_roll_nos_with_branch(&["R3".to_string(), "R1".to_string()])
        .await?;

    let rolls: Vec<&str> = records.iter().map(|r| r.student.roll_no.as_str()).collect();
    assert_eq!(rolls, vec!["R1", "R3"]);
    assert!(records.iter().all(|r| r.branch.is_some()));

    Ok(())
}
