//! System configuration repository.
//!
//! Key/value rows in `system_config`. Values are plain strings; typed interpretation
//! happens in the service layer.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};

pub struct SystemConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SystemConfigRepository<'a> {
    /// Creates a new SystemConfigRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SystemConfigRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Stored value
    /// - `Ok(None)` - Key was never written
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::SystemConfig::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|e| e.value))
    }

    /// Inserts `key` or overwrites its value, refreshing `updated_at` either way.
    ///
    /// # Returns
    /// - `Ok(())` - Value stored
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, key: &str, value: &str) -> Result<(), DbErr> {
        let model = entity::system_config::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        };

        entity::prelude::SystemConfig::insert(model)
            .on_conflict(
                OnConflict::column(entity::system_config::Column::Key)
                    .update_columns([
                        entity::system_config::Column::Value,
                        entity::system_config::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
