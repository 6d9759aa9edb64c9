//! Type-safe session management wrapper.
//!
//! `AuthSession` owns the single session key holding the authenticated identity and is
//! the only code that reads or writes it. The identity is a typed `SessionIdentity`;
//! anything stored under the key that does not deserialize into one, or fails its
//! validation, is discarded and the session cleared.

use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::auth::SessionIdentity,
    },
};

const SESSION_AUTH_IDENTITY: &str = "auth:identity";

/// Authentication session management.
///
/// Handles storing the identity on login, reading it back with validation, and session
/// lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes an authenticated session for `id` in `role`.
    ///
    /// Cycles the session ID first so an identifier issued before login is never
    /// promoted to an authenticated one.
    ///
    /// # Returns
    /// - `Ok(SessionIdentity)` - The identity now stored in the session
    /// - `Err(AppError::SessionErr(_))` - Failed to cycle or write the session
    pub async fn login(&self, role: Role, id: &str) -> Result<SessionIdentity, AppError> {
        let identity = SessionIdentity::new(role, id, Utc::now());

        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_IDENTITY, identity.clone())
            .await?;

        tracing::info!("{} {} logged in", role, id);

        Ok(identity)
    }

    /// Retrieves the validated identity from the session.
    ///
    /// # Returns
    /// - `Ok(Some(identity))` - A well-formed identity is stored
    /// - `Ok(None)` - Nobody is logged in
    /// - `Err(AppError::AuthErr(InvalidSession))` - Stored data was unusable; the session
    ///   has been cleared
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn identity(&self) -> Result<Option<SessionIdentity>, AppError> {
        let Some(raw) = self
            .session
            .get::<serde_json::Value>(SESSION_AUTH_IDENTITY)
            .await?
        else {
            return Ok(None);
        };

        let checked = serde_json::from_value::<SessionIdentity>(raw)
            .map_err(|e| e.to_string())
            .and_then(|identity| identity.validate(Utc::now()).map(|_| identity));

        match checked {
            Ok(identity) => Ok(Some(identity)),
            Err(reason) => {
                self.clear().await?;
                Err(AuthError::InvalidSession(reason).into())
            }
        }
    }

    /// Removes the session from the store and discards its data.
    ///
    /// Used during logout and whenever a stored identity is rejected.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }

    #[cfg(test)]
    pub async fn store_raw(&self, value: serde_json::Value) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_IDENTITY, value).await?;
        Ok(())
    }
}
