pub mod course;
pub mod enrollment;
pub mod health;

use crate::doc::ApiDoc;
use axum::{Router, routing::get};
use database::store::SeaOrmStore;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub store: SeaOrmStore,
    pub default_semester: Arc<str>,
}

impl AppState {
    pub fn new(store: SeaOrmStore, default_semester: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            default_semester: default_semester.into(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/courses", get(course::get_courses).post(course::add_course))
        .route(
            "/courses/{course_id}",
            get(course::get_course_by_id)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route(
            "/courses/{course_id}/students",
            get(enrollment::get_students)
                .post(enrollment::enroll_student)
                .delete(enrollment::withdraw_student),
        )
        .route(
            "/courses/{course_id}/waitinglist",
            get(enrollment::get_waiting_list).post(enrollment::add_to_waiting_list),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
}
