use thiserror::Error;

use crate::model::auth::Role;

/// Internal issues indicating corrupt data or unexpected library failures
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored credential hash is not a valid PHC string.
    ///
    /// The account cannot be verified until its hash is regenerated. Results in a
    /// 500 Internal Server Error with a generic message returned to client.
    #[error("Stored credential hash for {role} '{id}' is malformed: {reason}")]
    MalformedCredentialHash {
        role: Role,
        id: String,
        reason: String,
    },

    /// Hashing a secret failed
    #[error("Failed to hash secret: {0}")]
    HashSecret(String),
}
