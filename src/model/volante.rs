use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Smallest number that can be chosen on a volante.
pub const MIN_NUMBER: u8 = 1;
/// Largest number that can be chosen on a volante.
pub const MAX_NUMBER: u8 = 60;
/// Fewest numbers a volante may contain.
pub const MIN_SELECTION: usize = 6;
/// Most numbers a volante may contain.
pub const MAX_SELECTION: usize = 10;
/// Shortest accepted name, counted after trimming.
pub const MIN_NAME_LENGTH: usize = 3;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateVolanteDto {
    pub name: String,
    pub cpf: String,
    pub numbers: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct VolanteDto {
    pub id: i64,
    pub name: String,
    pub cpf: String,
    pub numbers: Vec<u8>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct VolanteCreatedDto {
    pub message: String,
    pub volante: VolanteDto,
}
