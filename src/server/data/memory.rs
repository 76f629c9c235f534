//! In-memory `VolanteStore` used by service and controller tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;

use crate::server::{
    data::VolanteStore,
    error::{store::StoreError, AppError},
    model::volante::{CreateVolanteParam, Volante},
};

#[derive(Default)]
struct Inner {
    next_id: i64,
    volantes: Vec<Volante>,
    config: HashMap<String, String>,
}

/// Store keeping everything in a mutex-guarded vector.
///
/// Enforces the same identity uniqueness as the database backend.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current configuration value, bypassing the trait.
    pub fn config_value(&self, key: &str) -> Option<String> {
        self.lock().config.get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl VolanteStore for MemoryStore {
    async fn fetch_entries(&self) -> Result<Vec<Volante>, AppError> {
        let mut volantes = self.lock().volantes.clone();
        volantes.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));
        Ok(volantes)
    }

    async fn append_entry(&self, param: CreateVolanteParam) -> Result<Volante, AppError> {
        let mut inner = self.lock();

        let key = param.identity_key();
        if inner.volantes.iter().any(|v| v.identity_key() == key) {
            return Err(StoreError::Conflict.into());
        }

        inner.next_id += 1;
        let volante = Volante {
            id: inner.next_id,
            name: param.name,
            cpf: param.cpf,
            numbers: param.numbers,
            timestamp: param.timestamp,
        };
        inner.volantes.push(volante.clone());

        Ok(volante)
    }

    async fn delete_all_entries(&self) -> Result<u64, AppError> {
        let mut inner = self.lock();
        let deleted = inner.volantes.len() as u64;
        inner.volantes.clear();
        Ok(deleted)
    }

    async fn get_config(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock().config.get(key).cloned())
    }

    async fn set_config(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.lock()
            .config
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
