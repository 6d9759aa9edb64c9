use axum::extract::{rejection::QueryRejection, Query};

use crate::server::error::AppError;

pub mod admin;
pub mod auth;
pub mod student;
pub mod teacher;


/// Unwraps query parameters, answering a rejected query string with `message` as a JSON 400.
fn query_or_bad_request<T>(
    query: Result<Query<T>, QueryRejection>,
    message: &str,
) -> Result<T, AppError> {
    match query {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => {
            tracing::debug!("Rejected query string: {}", rejection);
            Err(AppError::BadRequest(message.to_string()))
        }
    }
}
