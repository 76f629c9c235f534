//! `VolanteStore` backed by a SeaORM connection (SQLite or Postgres).

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        system_config::SystemConfigRepository, volante::VolanteRepository, VolanteStore,
    },
    error::AppError,
    model::volante::{CreateVolanteParam, Volante},
};

#[derive(Clone)]
pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VolanteStore for DatabaseStore {
    async fn fetch_entries(&self) -> Result<Vec<Volante>, AppError> {
        VolanteRepository::new(&self.db).get_all().await
    }

    async fn append_entry(&self, param: CreateVolanteParam) -> Result<Volante, AppError> {
        VolanteRepository::new(&self.db).create(param).await
    }

    async fn delete_all_entries(&self) -> Result<u64, AppError> {
        VolanteRepository::new(&self.db).delete_all().await
    }

    async fn get_config(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(SystemConfigRepository::new(&self.db).get(key).await?)
    }

    async fn set_config(&self, key: &str, value: &str) -> Result<(), AppError> {
        Ok(SystemConfigRepository::new(&self.db).upsert(key, value).await?)
    }
}
