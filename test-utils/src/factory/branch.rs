//! Branch factory for creating test branch entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test branches with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let branch = BranchFactory::new(&db)
///     .branch_code("UCM")
///     .branch_name("Mathematics and Computing")
///     .build()
///     .await?;
/// ```
pub struct BranchFactory<'a> {
    db: &'a DatabaseConnection,
    branch_code: String,
    branch_name: String,
}

impl<'a> BranchFactory<'a> {
    /// Creates a new BranchFactory with default values.
    ///
    /// Defaults:
    /// - branch_code: `"BR{id}"`
    /// - branch_name: `"Branch {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            branch_code: format!("BR{}", id),
            branch_name: format!("Branch {}", id),
        }
    }

    pub fn branch_code(mut self, branch_code: impl Into<String>) -> Self {
        self.branch_code = branch_code.into();
        self
    }

    pub fn branch_name(mut self, branch_name: impl Into<String>) -> Self {
        self.branch_name = branch_name.into();
        self
    }

    /// Builds and inserts the branch entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::branch::Model)` - Created branch entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::branch::Model, DbErr> {
        entity::branch::ActiveModel {
            branch_code: ActiveValue::Set(self.branch_code),
            branch_name: ActiveValue::Set(self.branch_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a branch with default values.
pub async fn create_branch(db: &DatabaseConnection) -> Result<entity::branch::Model, DbErr> {
    BranchFactory::new(db).build().await
}
