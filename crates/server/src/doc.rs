use crate::routes::{course, enrollment, health};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        course::get_courses,
        course::get_course_by_id,
        course::add_course,
        course::update_course,
        course::delete_course,
        enrollment::get_students,
        enrollment::enroll_student,
        enrollment::withdraw_student,
        enrollment::get_waiting_list,
        enrollment::add_to_waiting_list
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Courses", description = "Course related endpoints"),
        (name = "Enrollment", description = "Enrolled students and waiting lists"),
    ),
    info(
        title = "Course API",
        version = "1.0.0",
        description = "Course enrollment API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
