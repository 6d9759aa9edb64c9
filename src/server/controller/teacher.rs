use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, auth::Role, search::TeacherDashboardQuery, teacher::TeacherDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::teacher::TeacherService,
        state::AppState,
    },
};

/// Tag for grouping teacher endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teacher";

pub const INVALID_SORT_MESSAGE: &str = "Sort must be one of rollNo, totalMarks or dateOfBirth";

/// Get the signed-in teacher's offerings with their results.
///
/// Results of each offering are sorted by the `sort` query parameter, roll number by default.
///
/// # Access Control
/// - `Teacher` - Only teacher sessions
///
/// # Returns
/// - `200 OK` - Teacher payload
/// - `400 Bad Request` - Unknown sort order
/// - `401 Unauthorized` - Not logged in or session expired
/// - `403 Forbidden` - Session belongs to another role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teacher/dashboard",
    tag = TEACHER_TAG,
    params(TeacherDashboardQuery),
    responses(
        (status = 200, description = "Teacher dashboard", body = TeacherDto),
        (status = 400, description = "Unknown sort order", body = ErrorDto),
        (status = 401, description = "Not logged in or session expired", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_dashboard(
    State(state): State<AppState>,
    session: Session,
    query: Result<Query<TeacherDashboardQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = super::query_or_bad_request(query, INVALID_SORT_MESSAGE)?;

    let identity = AuthGuard::new(&session, state.session_max_age)
        .require(Role::Teacher)
        .await?;

    let mut dashboard = TeacherService::new(&state.db)
        .get_dashboard_by_id(&identity.id)
        .await?;

    dashboard.sort_results(query.sort.unwrap_or_default());

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
