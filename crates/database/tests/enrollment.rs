mod common;

use common::{STUDENTS, add_course, rows_for, setup};
use database::{error::ServiceError, services::enrollment::EnrollmentService};
use models::{
    enrollment_status::EnrollmentStatus,
    student::{Student, WaitingStudent},
};

const S1: &str = STUDENTS[0].0;
const S2: &str = STUDENTS[1].0;
const S3: &str = STUDENTS[2].0;

#[tokio::test]
async fn test_enroll_returns_student_identity() {
    let store = setup().await;
    let course_id = add_course(&store, 10).await;

    let student = EnrollmentService::enroll(&store, course_id, S1).await.unwrap();
    assert_eq!(
        student,
        Student {
            ssn: S1.to_string(),
            name: STUDENTS[0].1.to_string(),
        }
    );

    let rows = rows_for(&store, course_id, S1).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, EnrollmentStatus::Enrolled);
}

#[tokio::test]
async fn test_missing_student_is_reported_before_missing_course() {
    let store = setup().await;

    let err = EnrollmentService::enroll(&store, 999, "0000000000").await.unwrap_err();
    assert!(matches!(err, ServiceError::StudentNotFound));
    let err = EnrollmentService::add_to_waitlist(&store, 999, "0000000000")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::StudentNotFound));
    let err = EnrollmentService::withdraw(&store, 999, "0000000000")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::StudentNotFound));

    let err = EnrollmentService::enroll(&store, 999, S1).await.unwrap_err();
    assert!(matches!(err, ServiceError::CourseNotFound));
    let err = EnrollmentService::add_to_waitlist(&store, 999, S1).await.unwrap_err();
    assert!(matches!(err, ServiceError::CourseNotFound));
    let err = EnrollmentService::withdraw(&store, 999, S1).await.unwrap_err();
    assert!(matches!(err, ServiceError::CourseNotFound));
}

#[tokio::test]
async fn test_full_course_rejects_waiting_student() {
    let store = setup().await;
    let course_id = add_course(&store, 2).await;

    EnrollmentService::add_to_waitlist(&store, course_id, S3).await.unwrap();
    EnrollmentService::enroll(&store, course_id, S1).await.unwrap();
    EnrollmentService::enroll(&store, course_id, S2).await.unwrap();

    let err = EnrollmentService::enroll(&store, course_id, S3).await.unwrap_err();
    assert!(matches!(err, ServiceError::CapacityExceeded));

    // The waiting row is left untouched
    let rows = rows_for(&store, course_id, S3).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, EnrollmentStatus::Waiting);
}

#[tokio::test]
async fn test_full_course_reports_capacity_before_duplicate() {
    let store = setup().await;
    let course_id = add_course(&store, 1).await;

    EnrollmentService::enroll(&store, course_id, S1).await.unwrap();

    let err = EnrollmentService::enroll(&store, course_id, S1).await.unwrap_err();
    assert!(matches!(err, ServiceError::CapacityExceeded));
}

#[tokio::test]
async fn test_zero_capacity_course_accepts_nobody() {
    let store = setup().await;
    let course_id = add_course(&store, 0).await;

    let err = EnrollmentService::enroll(&store, course_id, S1).await.unwrap_err();
    assert!(matches!(err, ServiceError::CapacityExceeded));

    // The waiting list is not bounded by capacity
    EnrollmentService::add_to_waitlist(&store, course_id, S1).await.unwrap();
}

#[tokio::test]
async fn test_double_enroll_keeps_one_row() {
    let store = setup().await;
    let course_id = add_course(&store, 10).await;

    EnrollmentService::enroll(&store, course_id, S1).await.unwrap();
    let err = EnrollmentService::enroll(&store, course_id, S1).await.unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyEnrolled));

    let rows = rows_for(&store, course_id, S1).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, EnrollmentStatus::Enrolled);
}

#[tokio::test]
async fn test_reenroll_reuses_withdrawn_row() {
    let store = setup().await;
    let course_id = add_course(&store, 10).await;

    EnrollmentService::enroll(&store, course_id, S1).await.unwrap();
    let first_row_id = rows_for(&store, course_id, S1).await[0].id;

    assert!(EnrollmentService::withdraw(&store, course_id, S1).await.unwrap());
    let rows = rows_for(&store, course_id, S1).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, EnrollmentStatus::Deleted);

    EnrollmentService::enroll(&store, course_id, S1).await.unwrap();
    let rows = rows_for(&store, course_id, S1).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, first_row_id);
    assert_eq!(rows[0].status, EnrollmentStatus::Enrolled);

    // The row is no longer marked deleted, so it can be withdrawn again
    assert!(EnrollmentService::withdraw(&store, course_id, S1).await.unwrap());
}

#[tokio::test]
async fn test_waitlist_ignores_withdrawn_row() {
    let store = setup().await;
    let course_id = add_course(&store, 10).await;

    EnrollmentService::enroll(&store, course_id, S1).await.unwrap();
    EnrollmentService::withdraw(&store, course_id, S1).await.unwrap();
    EnrollmentService::add_to_waitlist(&store, course_id, S1).await.unwrap();

    let rows = rows_for(&store, course_id, S1).await;
    let statuses: Vec<_> = rows.iter().map(|row| row.status).collect();
    assert_eq!(
        statuses,
        [EnrollmentStatus::Deleted, EnrollmentStatus::Waiting]
    );

    // Enrolling reactivates the withdrawn row and leaves the waiting one in place
    EnrollmentService::enroll(&store, course_id, S1).await.unwrap();
    let statuses: Vec<_> = rows_for(&store, course_id, S1)
        .await
        .iter()
        .map(|row| row.status)
        .collect();
    assert_eq!(
        statuses,
        [EnrollmentStatus::Enrolled, EnrollmentStatus::Waiting]
    );

    // Waiting is checked before enrolled
    let err = EnrollmentService::add_to_waitlist(&store, course_id, S1)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyWaiting));
}

#[tokio::test]
async fn test_waitlist_rejects_duplicates() {
    let store = setup().await;
    let course_id = add_course(&store, 10).await;

    EnrollmentService::add_to_waitlist(&store, course_id, S1).await.unwrap();
    let err = EnrollmentService::add_to_waitlist(&store, course_id, S1)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyWaiting));

    EnrollmentService::enroll(&store, course_id, S2).await.unwrap();
    let err = EnrollmentService::add_to_waitlist(&store, course_id, S2)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyEnrolled));
}

#[tokio::test]
async fn test_enroll_promotes_waiting_row() {
    let store = setup().await;
    let course_id = add_course(&store, 10).await;

    EnrollmentService::add_to_waitlist(&store, course_id, S1).await.unwrap();
    let waiting_id = rows_for(&store, course_id, S1).await[0].id;

    EnrollmentService::enroll(&store, course_id, S1).await.unwrap();

    let rows = rows_for(&store, course_id, S1).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, waiting_id);
    assert_eq!(rows[0].status, EnrollmentStatus::Enrolled);
}

#[tokio::test]
async fn test_withdraw_waiting_student_is_not_enrolled() {
    let store = setup().await;
    let course_id = add_course(&store, 10).await;

    EnrollmentService::add_to_waitlist(&store, course_id, S1).await.unwrap();
    let err = EnrollmentService::withdraw(&store, course_id, S1).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotEnrolled));

    let err = EnrollmentService::withdraw(&store, course_id, S2).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotEnrolled));
}

#[tokio::test]
async fn test_withdraw_twice_is_already_deleted() {
    let store = setup().await;
    let course_id = add_course(&store, 10).await;

    EnrollmentService::enroll(&store, course_id, S1).await.unwrap();
    EnrollmentService::withdraw(&store, course_id, S1).await.unwrap();

    let err = EnrollmentService::withdraw(&store, course_id, S1).await.unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyDeleted));
}

#[tokio::test]
async fn test_roster_and_waiting_list() {
    let store = setup().await;
    let course_id = add_course(&store, 10).await;

    EnrollmentService::enroll(&store, course_id, S1).await.unwrap();
    EnrollmentService::enroll(&store, course_id, S2).await.unwrap();
    EnrollmentService::withdraw(&store, course_id, S2).await.unwrap();
    EnrollmentService::add_to_waitlist(&store, course_id, S3).await.unwrap();

    let roster = EnrollmentService::list_roster(&store, course_id).await.unwrap();
    assert_eq!(
        roster,
        [Student {
            ssn: S1.to_string(),
            name: STUDENTS[0].1.to_string(),
        }]
    );

    let waiting = EnrollmentService::list_waiting(&store, course_id).await.unwrap();
    assert_eq!(
        waiting,
        [WaitingStudent {
            name: STUDENTS[2].1.to_string(),
        }]
    );
}

#[tokio::test]
async fn test_lists_of_missing_course_are_not_found() {
    let store = setup().await;
    add_course(&store, 10).await;

    let err = EnrollmentService::list_waiting(&store, 999).await.unwrap_err();
    assert!(matches!(err, ServiceError::CourseNotFound));
    let err = EnrollmentService::list_roster(&store, 999).await.unwrap_err();
    assert!(matches!(err, ServiceError::CourseNotFound));

    let course_id = add_course(&store, 10).await;
    assert!(
        EnrollmentService::list_waiting(&store, course_id)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(
        EnrollmentService::list_roster(&store, course_id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_single_seat_scenario() {
    let store = setup().await;
    let course_id = add_course(&store, 1).await;

    EnrollmentService::enroll(&store, course_id, S1).await.unwrap();

    let err = EnrollmentService::enroll(&store, course_id, S2).await.unwrap_err();
    assert!(matches!(err, ServiceError::CapacityExceeded));

    EnrollmentService::add_to_waitlist(&store, course_id, S2).await.unwrap();
    let waiting_id = rows_for(&store, course_id, S2).await[0].id;

    assert!(EnrollmentService::withdraw(&store, course_id, S1).await.unwrap());

    EnrollmentService::enroll(&store, course_id, S2).await.unwrap();

    let s2_rows = rows_for(&store, course_id, S2).await;
    assert_eq!(s2_rows.len(), 1);
    assert_eq!(s2_rows[0].id, waiting_id);
    assert_eq!(s2_rows[0].status, EnrollmentStatus::Enrolled);

    let s1_rows = rows_for(&store, course_id, S1).await;
    assert_eq!(s1_rows.len(), 1);
    assert_eq!(s1_rows[0].status, EnrollmentStatus::Deleted);
}
