//! Administrative operations.
//!
//! `auth` handles password login and token issuance; `AdminService` performs the
//! destructive database reset behind a confirmation code.

pub mod auth;

use dioxus_logger::tracing;

use crate::{
    model::admin::RESET_CONFIRMATION_CODE,
    server::{data::VolanteStore, error::AppError},
};

pub struct AdminService<'a> {
    store: &'a dyn VolanteStore,
}

impl<'a> AdminService<'a> {
    /// Creates a new AdminService instance.
    ///
    /// # Arguments
    /// - `store` - Datastore holding volantes
    ///
    /// # Returns
    /// - `AdminService` - New service instance
    pub fn new(store: &'a dyn VolanteStore) -> Self {
        Self { store }
    }

    /// Deletes every stored volante.
    ///
    /// Requires the exact confirmation code `RESETAR`. System configuration rows are
    /// kept.
    ///
    /// # Arguments
    /// - `confirmation_code` - Code typed by the admin
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of volantes removed
    /// - `Err(AppError::BadRequest)` - Code missing or wrong
    /// - `Err(AppError)` - Datastore failure
    pub async fn reset_database(&self, confirmation_code: Option<&str>) -> Result<u64, AppError> {
        if confirmation_code != Some(RESET_CONFIRMATION_CODE) {
            return Err(AppError::BadRequest(
                "Código de confirmação inválido.".to_string(),
            ));
        }

        let deleted = self.store.delete_all_entries().await?;

        tracing::info!("Database reset by admin, {} volantes removed", deleted);

        Ok(deleted)
    }
}
