use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::admin::Admin;

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, admin_id: &str) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::Admin::find_by_id(admin_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Admin::from_entity))
    }
}
