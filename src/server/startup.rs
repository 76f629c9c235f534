use std::sync::Arc;

use dioxus_logger::tracing;

use crate::server::{
    config::{Config, StoreConfig},
    data::{database::DatabaseStore, supabase::SupabaseStore, VolanteStore},
    error::AppError,
};

/// Connects to the relational database and runs pending migrations.
///
/// Establishes a connection pool using the given URL (SQLite or Postgres), then runs all
/// pending SeaORM migrations so the `volantes` and `system_config` tables exist. This
/// function must complete successfully before the application can access the database.
///
/// # Arguments
/// - `url` - Database connection string
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(url: &str) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for the hosted datastore.
///
/// Redirects are disabled so the anon key is only ever sent to the configured host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Creates the datastore selected by the configuration.
///
/// # Returns
/// - `Ok(Arc<dyn VolanteStore>)` - Ready-to-use store
/// - `Err(AppError)` - Database connection, migration or HTTP client setup failed
pub async fn connect_to_store(config: &Config) -> Result<Arc<dyn VolanteStore>, AppError> {
    match &config.store {
        StoreConfig::Database { url } => {
            let db = connect_to_database(url).await?;
            tracing::info!("Using relational database store");
            Ok(Arc::new(DatabaseStore::new(db)))
        }
        StoreConfig::Supabase { url, anon_key } => {
            let http = setup_reqwest_client()?;
            tracing::info!("Using Supabase store at {}", url);
            Ok(Arc::new(SupabaseStore::new(
                http,
                url.clone(),
                anon_key.clone(),
            )))
        }
    }
}
