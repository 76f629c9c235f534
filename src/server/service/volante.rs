//! Volante registration service.
//!
//! Orchestrates a submission: full fetch of stored volantes, validation, timestamping
//! and insertion through the configured `VolanteStore`.

use chrono::Utc;
use dioxus_logger::tracing;

use crate::server::{
    data::VolanteStore,
    error::{store::StoreError, validation::ValidationError, AppError},
    model::volante::{SubmissionPayload, Volante},
    service::validation::validate_submission,
};

/// Service providing volante registration and listing.
pub struct VolanteService<'a> {
    store: &'a dyn VolanteStore,
}

impl<'a> VolanteService<'a> {
    /// Creates a new VolanteService instance.
    ///
    /// # Arguments
    /// - `store` - Datastore holding volantes
    ///
    /// # Returns
    /// - `VolanteService` - New service instance
    pub fn new(store: &'a dyn VolanteStore) -> Self {
        Self { store }
    }

    /// Validates and stores a new volante.
    ///
    /// The duplicate check runs against a snapshot of stored volantes; a concurrent
    /// submission for the same person that wins the race is caught by the store's
    /// unique identity index and reported the same way.
    ///
    /// # Arguments
    /// - `payload` - Raw submission body
    ///
    /// # Returns
    /// - `Ok(Volante)` - The stored volante
    /// - `Err(AppError::ValidationErr)` - Submission broke a business rule
    /// - `Err(AppError)` - Datastore failure
    pub async fn register(&self, payload: &SubmissionPayload) -> Result<Volante, AppError> {
        let existing = self.store.fetch_entries().await?;
        let candidate = validate_submission(payload, &existing)?;

        let volante = match self.store.append_entry(candidate.stamped(Utc::now())).await {
            Ok(volante) => volante,
            Err(AppError::StoreErr(StoreError::Conflict)) => {
                return Err(ValidationError::DuplicateSubmission.into())
            }
            Err(err) => return Err(err),
        };

        tracing::info!(
            "Registered volante {} with {} numbers",
            volante.id,
            volante.numbers.len()
        );

        Ok(volante)
    }

    /// Lists every stored volante, oldest first.
    pub async fn list(&self) -> Result<Vec<Volante>, AppError> {
        self.store.fetch_entries().await
    }
}
