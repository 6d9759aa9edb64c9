//! Branch data repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::academic::Branch;

pub struct BranchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BranchRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all branches ordered by branch code.
    pub async fn get_all(&self) -> Result<Vec<Branch>, DbErr> {
        let entities = entity::prelude::Branch::find()
            .order_by_asc(entity::branch::Column::BranchCode)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Branch::from_entity).collect())
    }

    pub async fn find_by_code(&self, branch_code: &str) -> Result<Option<Branch>, DbErr> {
        let entity = entity::prelude::Branch::find_by_id(branch_code.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Branch::from_entity))
    }

    /// Gets the branches whose codes appear in `branch_codes`.
    ///
    /// Unknown codes are skipped; an empty slice returns an empty list without querying.
    pub async fn get_by_codes(&self, branch_codes: &[String]) -> Result<Vec<Branch>, DbErr> {
        if branch_codes.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Branch::find()
            .filter(entity::branch::Column::BranchCode.is_in(branch_codes.iter().cloned()))
            .order_by_asc(entity::branch::Column::BranchCode)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Branch::from_entity).collect())
    }
}
