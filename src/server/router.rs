use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        admin::{__path_get_admin_dashboard, get_admin_dashboard},
        auth::{
            __path_admin_login, __path_get_session, __path_logout, __path_student_login,
            __path_teacher_login, admin_login, get_session, logout, student_login, teacher_login,
        },
        student::{__path_get_student_dashboard, get_student_dashboard},
        teacher::{__path_get_teacher_dashboard, get_teacher_dashboard},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exam Portal API",
        description = "Student, teacher and admin access to examination results"
    ),
    tags(
        (name = "auth", description = "Role login, session inspection and logout"),
        (name = "student", description = "Signed-in student's results and CGPA"),
        (name = "teacher", description = "Offerings taught by the signed-in teacher"),
        (name = "admin", description = "Full dataset with result search")
    )
)]
struct ApiDoc;

/// Builds the API routes along with the OpenAPI document describing them.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(student_login))
        .routes(routes!(teacher_login))
        .routes(routes!(admin_login))
        .routes(routes!(get_session))
        .routes(routes!(logout))
        .routes(routes!(get_student_dashboard))
        .routes(routes!(get_teacher_dashboard))
        .routes(routes!(get_admin_dashboard))
        .split_for_parts()
}
