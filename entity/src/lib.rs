//! SeaORM entities for the volante board.
//!
//! One module per table. `prelude` re-exports the entity types so callers can
//! write `entity::prelude::Volante::find()`.

pub mod prelude;

pub mod system_config;
pub mod volante;
