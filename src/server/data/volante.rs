//! Volante data repository for database operations.
//!
//! This module provides the `VolanteRepository` for reading, inserting and wiping volante
//! records. Numbers are stored as a JSON array in a text column and every row carries an
//! `identity_key` with a unique index, so a second volante for the same person is
//! rejected by the database even when two submissions race past validation.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr,
};

use crate::server::{
    error::{internal::InternalError, store::StoreError, AppError},
    model::volante::{CreateVolanteParam, Volante},
};

/// Repository providing database operations for volantes.
pub struct VolanteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VolanteRepository<'a> {
    /// Creates a new VolanteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `VolanteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every volante ordered by creation time, oldest first.
    ///
    /// Rows with the same timestamp are ordered by id so the result is stable.
    ///
    /// # Returns
    /// - `Ok(Vec<Volante>)` - All stored volantes
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored numbers column could not be decoded
    pub async fn get_all(&self) -> Result<Vec<Volante>, AppError> {
        let entities = entity::prelude::Volante::find()
            .order_by_asc(entity::volante::Column::Timestamp)
            .order_by_asc(entity::volante::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Volante::from_entity).collect()
    }

    /// Inserts a new volante.
    ///
    /// # Arguments
    /// - `param` - Validated and timestamped volante
    ///
    /// # Returns
    /// - `Ok(Volante)` - The created volante including its generated id
    /// - `Err(AppError::StoreErr(StoreError::Conflict))` - Identity key already taken
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, param: CreateVolanteParam) -> Result<Volante, AppError> {
        let identity_key = param.identity_key();
        let numbers =
            serde_json::to_string(&param.numbers).map_err(InternalError::EncodeNumbers)?;

        let result = entity::volante::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(param.name),
            cpf: ActiveValue::Set(param.cpf),
            identity_key: ActiveValue::Set(identity_key),
            numbers: ActiveValue::Set(numbers),
            timestamp: ActiveValue::Set(param.timestamp),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Volante::from_entity(entity),
            Err(err) if is_unique_violation(&err) => Err(StoreError::Conflict.into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes every volante.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = entity::prelude::Volante::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
