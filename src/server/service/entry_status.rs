//! Accepting-new-entries flag.
//!
//! The flag lives in `system_config` under `accept_new_entries`. Public submissions
//! read it without writing; the admin read creates the row with the default value so
//! the admin panel always reflects a stored state.

use dioxus_logger::tracing;

use crate::server::{
    data::VolanteStore,
    error::{internal::InternalError, AppError},
    model::system_config::{
        encode_flag, parse_flag, ACCEPT_NEW_ENTRIES_DEFAULT, ACCEPT_NEW_ENTRIES_KEY,
    },
};

pub struct EntryStatusService<'a> {
    store: &'a dyn VolanteStore,
}

impl<'a> EntryStatusService<'a> {
    pub fn new(store: &'a dyn VolanteStore) -> Self {
        Self { store }
    }

    /// Whether public submissions are currently accepted.
    ///
    /// A missing row counts as accepting and is not created.
    ///
    /// # Returns
    /// - `Ok(bool)` - Current flag
    /// - `Err(AppError::InternalErr)` - Stored value is not `"true"`/`"false"`
    /// - `Err(AppError)` - Datastore failure
    pub async fn is_accepting_entries(&self) -> Result<bool, AppError> {
        match self.store.get_config(ACCEPT_NEW_ENTRIES_KEY).await? {
            Some(value) => decode(value),
            None => Ok(ACCEPT_NEW_ENTRIES_DEFAULT),
        }
    }

    /// Reads the flag for the admin panel, storing the default if it was never set.
    pub async fn entry_status(&self) -> Result<bool, AppError> {
        match self.store.get_config(ACCEPT_NEW_ENTRIES_KEY).await? {
            Some(value) => decode(value),
            None => {
                self.store
                    .set_config(
                        ACCEPT_NEW_ENTRIES_KEY,
                        encode_flag(ACCEPT_NEW_ENTRIES_DEFAULT),
                    )
                    .await?;
                Ok(ACCEPT_NEW_ENTRIES_DEFAULT)
            }
        }
    }

    /// Sets the flag to an explicit value.
    pub async fn set_accepting_entries(&self, accept: bool) -> Result<bool, AppError> {
        self.store
            .set_config(ACCEPT_NEW_ENTRIES_KEY, encode_flag(accept))
            .await?;

        tracing::info!("New entries {}", if accept { "enabled" } else { "paused" });

        Ok(accept)
    }

    /// Sets the flag when `accept` is given, otherwise flips the current value.
    ///
    /// # Returns
    /// - `Ok(bool)` - The value now stored
    pub async fn toggle(&self, accept: Option<bool>) -> Result<bool, AppError> {
        let next = match accept {
            Some(accept) => accept,
            None => !self.entry_status().await?,
        };

        self.set_accepting_entries(next).await
    }
}

fn decode(value: String) -> Result<bool, AppError> {
    parse_flag(&value).ok_or_else(|| {
        InternalError::InvalidConfigValue {
            key: ACCEPT_NEW_ENTRIES_KEY.to_string(),
            value,
        }
        .into()
    })
}
