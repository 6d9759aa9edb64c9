use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, auth::Role, student::StudentDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Get the signed-in student's profile, results and CGPA.
///
/// # Access Control
/// - `Student` - Only the student session can view its own profile
///
/// # Returns
/// - `200 OK` - Student payload
/// - `401 Unauthorized` - Not logged in or session expired
/// - `403 Forbidden` - Session belongs to another role
/// - `404 Not Found` - Student record no longer exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/student/dashboard",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Student profile", body = StudentDto),
        (status = 401, description = "Not logged in or session expired", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session, state.session_max_age)
        .require(Role::Student)
        .await?;

    let profile = StudentService::new(&state.db)
        .get_profile_by_roll_no(&identity.id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
