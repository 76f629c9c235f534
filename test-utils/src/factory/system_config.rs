//! System config factory for inserting key/value rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a configuration row with the given key and value.
///
/// # Arguments
/// - `db` - Database connection
/// - `key` - Configuration key, e.g. `"accept_new_entries"`
/// - `value` - Stored string value
///
/// # Returns
/// - `Ok(entity::system_config::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_config(
    db: &DatabaseConnection,
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<entity::system_config::Model, DbErr> {
    entity::system_config::ActiveModel {
        key: ActiveValue::Set(key.into()),
        value: ActiveValue::Set(value.into()),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
