use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{admin::AdminDto, api::ErrorDto, auth::Role, search::AdminDashboardQuery},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::search::filter_results,
        service::admin::AdminService, state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

pub const INVALID_FILTER_MESSAGE: &str = "Filter must be one of all, branch, subject or status";

/// Get the full dataset with the result list searched and filtered.
///
/// # Access Control
/// - `Admin` - Only admin sessions
///
/// # Arguments
/// - `search` - Case-insensitive term matched against roll number, names, subject and branch
/// - `filter` - `all`, `branch`, `subject` or `status`; a named dimension must also contain
///   the term
///
/// # Returns
/// - `200 OK` - Admin payload; only `results` is narrowed by the search
/// - `400 Bad Request` - Unknown filter
/// - `401 Unauthorized` - Not logged in or session expired
/// - `403 Forbidden` - Session belongs to another role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = ADMIN_TAG,
    params(AdminDashboardQuery),
    responses(
        (status = 200, description = "Admin dashboard", body = AdminDto),
        (status = 400, description = "Unknown filter", body = ErrorDto),
        (status = 401, description = "Not logged in or session expired", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_dashboard(
    State(state): State<AppState>,
    session: Session,
    query: Result<Query<AdminDashboardQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = super::query_or_bad_request(query, INVALID_FILTER_MESSAGE)?;

    let identity = AuthGuard::new(&session, state.session_max_age)
        .require(Role::Admin)
        .await?;

    let mut dashboard = AdminService::new(&state.db)
        .get_dashboard_by_id(&identity.id)
        .await?;

    let search = query.search.unwrap_or_default();
    let filter = query.filter.unwrap_or_default();
    dashboard.results = filter_results(dashboard.results, &search, filter);

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
