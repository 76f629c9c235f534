//! Factory methods for creating test data.
//!
//! Factories insert rows directly through SeaORM with sensible defaults, reducing
//! boilerplate in repository tests. Each entity has a `Factory` builder for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let volante = factory::volante::create_volante(&db).await?;
//!
//! let custom = factory::volante::VolanteFactory::new(&db)
//!     .name("Ana Silva")
//!     .cpf("52998224725")
//!     .numbers(vec![1, 2, 3, 4, 5, 6])
//!     .build()
//!     .await?;
//!
//! factory::system_config::create_config(&db, "accept_new_entries", "false").await?;
//! ```

pub mod helpers;
pub mod system_config;
pub mod volante;

pub use system_config::create_config;
pub use volante::create_volante;
