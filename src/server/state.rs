//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - The datastore behind the `VolanteStore` trait
//! - The admin authentication service (password hash and signing keys)

use std::sync::Arc;

use crate::server::{data::VolanteStore, service::admin::auth::AdminAuthService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `Arc<dyn VolanteStore>` is a reference-counted pointer to a store that itself
///   wraps a connection pool or an HTTP client
/// - `AdminAuthService` shares its keys
#[derive(Clone)]
pub struct AppState {
    /// Datastore for volantes and system configuration.
    pub store: Arc<dyn VolanteStore>,

    /// Admin password verification and token signing.
    pub admin_auth: AdminAuthService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `store` - Configured datastore
    /// - `admin_auth` - Admin authentication service
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(store: Arc<dyn VolanteStore>, admin_auth: AdminAuthService) -> Self {
        Self { store, admin_auth }
    }
}
