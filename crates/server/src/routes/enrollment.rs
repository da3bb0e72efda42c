use crate::{
    dtos::student::{StudentRequest, StudentResponse, WaitingStudentResponse},
    error::ApiError,
    routes::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::enrollment::EnrollmentService;

/// List the students enrolled in a course
#[utoipa::path(
    get,
    path = "/courses/{course_id}/students",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrolled students", body = Vec<StudentResponse>),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollment"
)]
pub async fn get_students(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = EnrollmentService::list_roster(&state.store, course_id).await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Enroll an existing student in a course
#[utoipa::path(
    post,
    path = "/courses/{course_id}/students",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student enrolled", body = StudentResponse),
        (status = 404, description = "Student or course not found"),
        (status = 409, description = "Course is full or student already enrolled"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollment"
)]
pub async fn enroll_student(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(request): Json<StudentRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = EnrollmentService::enroll(&state.store, course_id, &request.ssn).await?;

    Ok(Json(student.into()))
}

/// Withdraw an enrolled student from a course
#[utoipa::path(
    delete,
    path = "/courses/{course_id}/students",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = StudentRequest,
    responses(
        (status = 204, description = "Student withdrawn"),
        (status = 404, description = "Student, course or enrollment not found"),
        (status = 409, description = "Student already removed from the course"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollment"
)]
pub async fn withdraw_student(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(request): Json<StudentRequest>,
) -> Result<StatusCode, ApiError> {
    EnrollmentService::withdraw(&state.store, course_id, &request.ssn).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the names of the students waiting for a course
#[utoipa::path(
    get,
    path = "/courses/{course_id}/waitinglist",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Waiting list", body = Vec<WaitingStudentResponse>),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollment"
)]
pub async fn get_waiting_list(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<Json<Vec<WaitingStudentResponse>>, ApiError> {
    let students = EnrollmentService::list_waiting(&state.store, course_id).await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Put an existing student on the waiting list of a course
#[utoipa::path(
    post,
    path = "/courses/{course_id}/waitinglist",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student added to the waiting list", body = StudentResponse),
        (status = 404, description = "Student or course not found"),
        (status = 409, description = "Student already waiting or enrolled"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollment"
)]
pub async fn add_to_waiting_list(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(request): Json<StudentRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student =
        EnrollmentService::add_to_waitlist(&state.store, course_id, &request.ssn).await?;

    Ok(Json(student.into()))
}
