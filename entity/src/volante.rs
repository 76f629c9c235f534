//! Volante entity - one submitted set of lottery numbers.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "volantes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Trimmed display name as submitted.
    pub name: String,
    /// Digit-only CPF.
    pub cpf: String,
    /// `"{cpf}:{lowercase name}"`, unique so the store rejects a second
    /// volante for the same person even when two submissions race.
    #[sea_orm(unique)]
    pub identity_key: String,
    /// Chosen numbers as a JSON array, ascending.
    pub numbers: String,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
