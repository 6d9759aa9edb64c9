use sea_orm::DbErr;

/// Unwraps the outcome of a secondary query, logging a failure and falling back to the
/// type's empty value so the primary record can still be returned.
pub fn or_empty<T: Default>(result: Result<T, DbErr>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!("Failed to load {}: {}", what, err);
            T::default()
        }
    }
}
