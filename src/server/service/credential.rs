//! Salted hashing and verification of login secrets.
//!
//! Secrets (teacher and admin passwords, student date-of-birth credentials) are stored as
//! Argon2id PHC strings. Verification reads the algorithm parameters and salt from the
//! stored string, so hashes produced with different cost settings verify alike.

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    model::auth::Role,
    server::error::{internal::InternalError, AppError},
};

pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hashes `secret` with a fresh random salt.
    ///
    /// # Returns
    /// - `Ok(String)` - Argon2id PHC string
    /// - `Err(AppError::InternalErr(HashSecret))` - Salt encoding or hashing failed
    pub fn hash(&self, secret: &str) -> Result<String, AppError> {
        let salt_bytes: [u8; 16] = rand::random();
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| InternalError::HashSecret(e.to_string()))?;

        let hash = self
            .argon2
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| InternalError::HashSecret(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Checks `secret` against the stored hash of the account `id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Secret matches
    /// - `Ok(false)` - Secret does not match
    /// - `Err(AppError::InternalErr(MalformedCredentialHash))` - Stored value is not a usable
    ///   PHC string; this is never reported as a mismatch
    pub fn verify(
        &self,
        role: Role,
        id: &str,
        secret: &str,
        stored_hash: &str,
    ) -> Result<bool, AppError> {
        let malformed = |e: password_hash::Error| InternalError::MalformedCredentialHash {
            role,
            id: id.to_string(),
            reason: e.to_string(),
        };

        let parsed = PasswordHash::new(stored_hash).map_err(malformed)?;

        match self.argon2.verify_password(secret.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(malformed(e).into()),
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}
