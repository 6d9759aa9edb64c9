use chrono::{Duration, Utc};
use tower_sessions::Session;

use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::auth::SessionIdentity,
    },
};

/// Guards handlers behind an authenticated, unexpired session of a given role.
pub struct AuthGuard<'a> {
    session: &'a Session,
    max_age: Duration,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session, max_age: Duration) -> Self {
        Self { session, max_age }
    }

    /// Returns the session's identity if it is present and younger than the maximum age.
    ///
    /// An expired identity is removed from the session before `SessionExpired` is returned.
    pub async fn current(&self) -> Result<SessionIdentity, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(identity) = auth_session.identity().await? else {
            return Err(AuthError::NotInSession.into());
        };

        if identity.is_expired(Utc::now(), self.max_age) {
            auth_session.clear().await?;
            return Err(AuthError::SessionExpired {
                role: identity.role,
                id: identity.id,
            }
            .into());
        }

        Ok(identity)
    }

    /// Like [`AuthGuard::current`], additionally requiring `role`.
    pub async fn require(&self, role: Role) -> Result<SessionIdentity, AppError> {
        let identity = self.current().await?;

        if identity.role != role {
            return Err(AuthError::AccessDenied {
                required: role,
                actual: identity.role,
                id: identity.id,
            }
            .into());
        }

        Ok(identity)
    }
}
