//! Datastore access for volantes and system configuration.
//!
//! Repositories (`VolanteRepository`, `SystemConfigRepository`) perform SeaORM queries
//! and convert entity models to domain models at the boundary. The `VolanteStore` trait
//! is what services depend on; it is implemented by `DatabaseStore` (SeaORM), by
//! `SupabaseStore` (hosted PostgREST over HTTP) and, in tests, by `MemoryStore`.

pub mod database;
pub mod supabase;
pub mod system_config;
pub mod volante;

#[cfg(test)]
pub mod memory;
#[cfg(test)]
mod test;

use async_trait::async_trait;

use crate::server::{
    error::AppError,
    model::volante::{CreateVolanteParam, Volante},
};

/// Gateway to the `volantes` collection and the `system_config` key/value rows.
///
/// Every operation propagates the backend's error unchanged; no retries are attempted.
#[async_trait]
pub trait VolanteStore: Send + Sync {
    /// Fetches every stored volante ordered by timestamp ascending.
    async fn fetch_entries(&self) -> Result<Vec<Volante>, AppError>;

    /// Persists a new volante and returns it with its store-assigned id.
    ///
    /// # Returns
    /// - `Ok(Volante)` - The stored volante
    /// - `Err(AppError::StoreErr(StoreError::Conflict))` - A volante with the same
    ///   identity already exists
    /// - `Err(AppError)` - Any other backend failure
    async fn append_entry(&self, param: CreateVolanteParam) -> Result<Volante, AppError>;

    /// Deletes every stored volante, returning how many were removed.
    async fn delete_all_entries(&self) -> Result<u64, AppError>;

    /// Reads a configuration value; `None` when the key was never written.
    async fn get_config(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Inserts or replaces a configuration value.
    async fn set_config(&self, key: &str, value: &str) -> Result<(), AppError>;
}
