//! Server-side domain models and operation parameters.
//!
//! Domain models sit between the data layer (SeaORM entities / REST rows) and the
//! controller layer (DTOs). Each model provides `from_entity` and `into_dto`
//! conversions at the corresponding boundary.

pub mod stats;
pub mod system_config;
pub mod volante;
