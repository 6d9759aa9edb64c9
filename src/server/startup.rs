use std::{io::Read, sync::Arc};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router,
    service::credential::CredentialHasher,
    state::AppState,
};

/// Name of the session cookie issued to browsers.
pub const SESSION_COOKIE_NAME: &str = "examportal.sid";

/// Connects to the PostgreSQL database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's PostgreSQL pool.
///
/// Sessions expire after `SESSION_IDLE_MINUTES` of inactivity; the absolute lifetime is
/// enforced separately by the auth guard.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer with the session table migrated
/// - `Err(AppError::ConfigErr)` - `DATABASE_URL` does not point at PostgreSQL
/// - `Err(AppError::InternalError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<PostgresStore>, AppError> {
    if db.get_database_backend() != DatabaseBackend::Postgres {
        return Err(ConfigError::InvalidEnvVar {
            name: "DATABASE_URL".to_string(),
            value: "<redacted>".to_string(),
            reason: "session storage requires a PostgreSQL database".to_string(),
        }
        .into());
    }

    let pool = db.get_postgres_connection_pool();
    let session_store = PostgresStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session table: {}", e)))?;

    let session = SessionManagerLayer::new(session_store)
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(config.secure_cookies)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(config.session_idle_timeout()));

    Ok(session)
}

/// Assembles the API router with documentation, sessions, rate limiting and CORS.
pub fn build_app(
    db: DatabaseConnection,
    session: SessionManagerLayer<PostgresStore>,
    config: &Config,
) -> Result<Router, AppError> {
    let (api, openapi) = router::router();

    let governor_config = GovernorConfigBuilder::default()
        .per_second(config.rate_limit_replenish_seconds)
        .burst_size(config.rate_limit_burst)
        .finish()
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "RATE_LIMIT_BURST".to_string(),
            value: config.rate_limit_burst.to_string(),
            reason: "rate limit quota must be non-zero".to_string(),
        })?;

    let mut app = api
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .layer(session)
        .layer(GovernorLayer::new(Arc::new(governor_config)));

    if let Some(origin) = config.allowed_origin.clone() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_credentials(true)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE]),
        );
    }

    Ok(app.with_state(AppState::new(db, config.session_max_age())))
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Reads a secret from standard input and prints its salted hash.
///
/// Used by operators to provision `password_hash` and `credential_hash` columns.
pub fn print_password_hash() -> Result<(), AppError> {
    let mut secret = String::new();
    std::io::stdin().read_to_string(&mut secret)?;

    let secret = secret.trim_end_matches(['\r', '\n']);
    if secret.is_empty() {
        return Err(AppError::BadRequest(
            "Expected a secret on standard input".to_string(),
        ));
    }

    let hash = CredentialHasher::new().hash(secret)?;
    println!("{}", hash);

    Ok(())
}
