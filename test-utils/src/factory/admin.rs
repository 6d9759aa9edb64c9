//! Admin factory for creating test admin entities.

use crate::factory::helpers::{hash_secret, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default plain text password given to factory admins.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin-password";

/// Factory for creating test admins with customizable fields.
pub struct AdminFactory<'a> {
    db: &'a DatabaseConnection,
    admin_id: String,
    username: String,
    password: String,
}

impl<'a> AdminFactory<'a> {
    /// Creates a new AdminFactory with default values.
    ///
    /// Defaults:
    /// - admin_id: `"A{id}"`
    /// - username: `"admin{id}"`
    /// - password: `DEFAULT_ADMIN_PASSWORD`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            admin_id: format!("A{}", id),
            username: format!("admin{}", id),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }

    pub fn admin_id(mut self, admin_id: impl Into<String>) -> Self {
        self.admin_id = admin_id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Stores `password_hash` verbatim, bypassing hashing.
    ///
    /// Used to seed corrupt records for error handling tests.
    pub async fn build_with_raw_hash(
        self,
        password_hash: impl Into<String>,
    ) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            admin_id: ActiveValue::Set(self.admin_id),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(password_hash.into()),
        }
        .insert(self.db)
        .await
    }

    /// Builds and inserts the admin entity into the database.
    pub async fn build(self) -> Result<entity::admin::Model, DbErr> {
        let password_hash = hash_secret(&self.password)?;
        self.build_with_raw_hash(password_hash).await
    }
}

/// Creates an admin with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).build().await
}
