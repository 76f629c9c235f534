//! Volante factory for creating test volante entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{cpf_from_seed, next_id};

/// Factory for creating test volantes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let volante = VolanteFactory::new(&db)
///     .name("Ana Silva")
///     .numbers(vec![5, 10, 15, 20, 25, 30])
///     .build()
///     .await?;
/// ```
pub struct VolanteFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    cpf: String,
    numbers: Vec<u8>,
    timestamp: DateTime<Utc>,
}

impl<'a> VolanteFactory<'a> {
    /// Creates a new VolanteFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Apostador {id}"`
    /// - cpf: checksum-valid CPF derived from the same id
    /// - numbers: `[1, 2, 3, 4, 5, 6]`
    /// - timestamp: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Apostador {}", id),
            cpf: cpf_from_seed(100_000_000 + id),
            numbers: vec![1, 2, 3, 4, 5, 6],
            timestamp: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = cpf.into();
        self
    }

    pub fn numbers(mut self, numbers: Vec<u8>) -> Self {
        self.numbers = numbers;
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the volante entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::volante::Model)` - Created volante entity
    /// - `Err(DbErr)` - Database error during insert (including identity conflicts)
    pub async fn build(self) -> Result<entity::volante::Model, DbErr> {
        let identity_key = format!("{}:{}", self.cpf, self.name.trim().to_lowercase());
        let numbers = serde_json::to_string(&self.numbers)
            .map_err(|e| DbErr::Custom(format!("Failed to encode numbers: {}", e)))?;

        entity::volante::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            cpf: ActiveValue::Set(self.cpf),
            identity_key: ActiveValue::Set(identity_key),
            numbers: ActiveValue::Set(numbers),
            timestamp: ActiveValue::Set(self.timestamp),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a volante with default values.
///
/// Shorthand for `VolanteFactory::new(db).build().await`.
pub async fn create_volante(db: &DatabaseConnection) -> Result<entity::volante::Model, DbErr> {
    VolanteFactory::new(db).build().await
}
