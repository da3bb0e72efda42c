use crate::{
    dtos::course::{
        CourseDatesRequest, CourseQueryParams, CourseRequest, CourseResponse,
        CourseSummaryResponse,
    },
    error::ApiError,
    routes::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::{error::ServiceError, services::course::CourseService};

/// List the courses of a semester
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "Courses of the semester", body = Vec<CourseSummaryResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<Vec<CourseSummaryResponse>>, ApiError> {
    let semester = params
        .semester
        .unwrap_or_else(|| state.default_semester.to_string());

    let courses = CourseService::list_courses(&state.store, &semester).await?;

    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Get a specific course by ID
#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = CourseService::get_course_details(&state.store, course_id)
        .await?
        .ok_or(ServiceError::CourseNotFound)?;

    Ok(Json(course.into()))
}

/// Open a new course from a course template
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "End date before start date"),
        (status = 404, description = "Course template not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn add_course(
    State(state): State<AppState>,
    Json(request): Json<CourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    let course = CourseService::add_course(&state.store, request.into()).await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}

/// Change the start and end dates of a course
#[utoipa::path(
    put,
    path = "/courses/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = CourseDatesRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 400, description = "End date before start date"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(request): Json<CourseDatesRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = CourseService::update_course(
        &state.store,
        course_id,
        request.start_date,
        request.end_date,
    )
    .await?
    .ok_or(ServiceError::CourseNotFound)?;

    Ok(Json(course.into()))
}

/// Delete a course together with its enrollments
#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if !CourseService::delete_course(&state.store, course_id).await? {
        return Err(ServiceError::CourseNotFound.into());
    }

    Ok(StatusCode::NO_CONTENT)
}
