use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{
            AdminLoginDto, AdminLoginResponseDto, Role, SessionDto, StudentLoginDto,
            StudentLoginResponseDto, TeacherLoginDto, TeacherLoginResponseDto,
            LOGIN_SUCCESS_MESSAGE,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::auth::{AdminLoginParam, StudentLoginParam, TeacherLoginParam},
        service::{
            admin::AdminService, auth::AuthService, student::StudentService,
            teacher::TeacherService,
        },
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Unwraps a JSON body, treating an unparsable one as a body with every field missing.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!("Rejected login body: {}", rejection);
            T::default()
        }
    }
}

/// Log in as a student.
///
/// Verifies the roll number and date of birth, starts an authenticated session and
/// returns the student's profile with results and CGPA.
///
/// # Returns
/// - `200 OK` - Login successful with the student payload
/// - `400 Bad Request` - Roll number or date of birth missing
/// - `401 Unauthorized` - Date of birth does not match
/// - `404 Not Found` - Unknown roll number
/// - `500 Internal Server Error` - Database or hashing failure
#[utoipa::path(
    post,
    path = "/api/auth/student/login",
    tag = AUTH_TAG,
    request_body = StudentLoginDto,
    responses(
        (status = 200, description = "Login successful", body = StudentLoginResponseDto),
        (status = 400, description = "Roll number and date of birth are required", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn student_login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<StudentLoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = StudentLoginParam::from_dto(body_or_default(payload))?;

    let student = AuthService::new(&state.db).login_student(param).await?;
    AuthSession::new(&session)
        .login(Role::Student, &student.roll_no)
        .await?;

    let profile = StudentService::new(&state.db).get_profile(student).await;

    Ok((
        StatusCode::OK,
        Json(StudentLoginResponseDto {
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
            student: profile.into_dto(),
        }),
    ))
}

/// Log in as a teacher.
///
/// # Returns
/// - `200 OK` - Login successful with the teacher's offerings and results
/// - `400 Bad Request` - Teacher ID or password missing
/// - `401 Unauthorized` - Password does not match
/// - `404 Not Found` - Unknown teacher ID
/// - `500 Internal Server Error` - Database or hashing failure
#[utoipa::path(
    post,
    path = "/api/auth/teacher/login",
    tag = AUTH_TAG,
    request_body = TeacherLoginDto,
    responses(
        (status = 200, description = "Login successful", body = TeacherLoginResponseDto),
        (status = 400, description = "Teacher ID and password are required", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn teacher_login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<TeacherLoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = TeacherLoginParam::from_dto(body_or_default(payload))?;

    let teacher = AuthService::new(&state.db).login_teacher(param).await?;
    AuthSession::new(&session)
        .login(Role::Teacher, &teacher.teacher_id)
        .await?;

    let dashboard = TeacherService::new(&state.db).get_dashboard(teacher).await;

    Ok((
        StatusCode::OK,
        Json(TeacherLoginResponseDto {
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
            teacher: dashboard.into_dto(),
        }),
    ))
}

/// Log in as an admin.
///
/// # Returns
/// - `200 OK` - Login successful with the full dataset
/// - `400 Bad Request` - Admin ID or password missing
/// - `401 Unauthorized` - Password does not match
/// - `404 Not Found` - Unknown admin ID
/// - `500 Internal Server Error` - Database or hashing failure
#[utoipa::path(
    post,
    path = "/api/auth/admin/login",
    tag = AUTH_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Login successful", body = AdminLoginResponseDto),
        (status = 400, description = "Admin ID and password are required", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<AdminLoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = AdminLoginParam::from_dto(body_or_default(payload))?;

    let admin = AuthService::new(&state.db).login_admin(param).await?;
    AuthSession::new(&session)
        .login(Role::Admin, &admin.admin_id)
        .await?;

    let dashboard = AdminService::new(&state.db).get_dashboard(admin).await;

    Ok((
        StatusCode::OK,
        Json(AdminLoginResponseDto {
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
            admin: dashboard.into_dto(),
        }),
    ))
}

/// Get the identity of the current session.
///
/// # Returns
/// - `200 OK` - Role, identifier and login time of the session
/// - `401 Unauthorized` - Not logged in, or the session is invalid or expired
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session", body = SessionDto),
        (status = 401, description = "Not logged in or session expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session, state.session_max_age)
        .current()
        .await?;

    Ok((StatusCode::OK, Json(identity.into_dto(state.session_max_age))))
}

/// Log out and discard the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

