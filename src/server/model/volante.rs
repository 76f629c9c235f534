//! Volante domain models and parameters.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    model::volante::{VolanteCreatedDto, VolanteDto},
    server::error::{internal::InternalError, AppError},
};

/// A stored volante.
#[derive(Debug, Clone, PartialEq)]
pub struct Volante {
    /// Store-assigned identifier.
    pub id: i64,
    /// Trimmed name.
    pub name: String,
    /// Digit-only CPF.
    pub cpf: String,
    /// Unique numbers in ascending order.
    pub numbers: Vec<u8>,
    /// Creation instant.
    pub timestamp: DateTime<Utc>,
}

impl Volante {
    /// Converts the volante domain model to a DTO for API responses.
    pub fn into_dto(self) -> VolanteDto {
        VolanteDto {
            id: self.id,
            name: self.name,
            cpf: self.cpf,
            numbers: self.numbers,
            timestamp: self.timestamp,
        }
    }

    /// Converts the volante into the 201 response body.
    pub fn into_created_dto(self) -> VolanteCreatedDto {
        VolanteCreatedDto {
            message: "Volante registrado com sucesso.".to_string(),
            volante: self.into_dto(),
        }
    }

    /// Converts an entity model to a volante domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Volante)` - The converted domain model
    /// - `Err(AppError::InternalErr(MalformedNumbers))` - Stored numbers column is not
    ///   a JSON array of numbers
    pub fn from_entity(entity: entity::volante::Model) -> Result<Self, AppError> {
        let id = i64::from(entity.id);
        let numbers = decode_numbers(id, &entity.numbers)?;

        Ok(Self {
            id,
            name: entity.name,
            cpf: entity.cpf,
            numbers,
            timestamp: entity.timestamp,
        })
    }

    /// Key identifying the person behind this volante; see [`identity_key`].
    pub fn identity_key(&self) -> String {
        identity_key(&self.name, &self.cpf)
    }
}

/// Normalised `(cpf, name)` pair used for duplicate detection.
///
/// The name is trimmed and lowercased so `"Ana Silva"` and `" ana silva"` collide.
/// `cpf` is expected to be digit-only already.
pub fn identity_key(name: &str, cpf: &str) -> String {
    format!("{}:{}", cpf, name.trim().to_lowercase())
}

/// Decodes the JSON-encoded numbers column.
pub fn decode_numbers(id: i64, raw: &str) -> Result<Vec<u8>, AppError> {
    serde_json::from_str(raw).map_err(|source| {
        InternalError::MalformedNumbers {
            id,
            value: raw.to_string(),
            source,
        }
        .into()
    })
}

/// Raw body of a submission as received over HTTP.
///
/// Every field is optional and `numbers` is untyped so the validator, not the JSON
/// extractor, decides what is acceptable and which message the user sees.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub numbers: Option<serde_json::Value>,
}

/// A submission that passed validation and is ready to be stamped and stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVolante {
    pub name: String,
    pub cpf: String,
    pub numbers: Vec<u8>,
}

impl NewVolante {
    /// Stamps the candidate with its creation instant.
    pub fn stamped(self, timestamp: DateTime<Utc>) -> CreateVolanteParam {
        CreateVolanteParam {
            name: self.name,
            cpf: self.cpf,
            numbers: self.numbers,
            timestamp,
        }
    }
}

/// Parameters for persisting a new volante.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateVolanteParam {
    pub name: String,
    pub cpf: String,
    pub numbers: Vec<u8>,
    pub timestamp: DateTime<Utc>,
}

impl CreateVolanteParam {
    pub fn identity_key(&self) -> String {
        identity_key(&self.name, &self.cpf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_key_ignores_case_and_padding() {
        assert_eq!(
            identity_key("  Ana Silva ", "52998224725"),
            identity_key("ana silva", "52998224725")
        );
        assert_ne!(
            identity_key("Ana Silva", "52998224725"),
            identity_key("Ana Silva", "11144477735")
        );
    }

    #[test]
    fn from_entity_rejects_malformed_numbers() {
        let entity = entity::volante::Model {
            id: 7,
            name: "Ana Silva".to_string(),
            cpf: "52998224725".to_string(),
            identity_key: identity_key("Ana Silva", "52998224725"),
            numbers: "1,2,3".to_string(),
            timestamp: Utc::now(),
        };

        let result = Volante::from_entity(entity);

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::MalformedNumbers { id: 7, .. }))
        ));
    }
}
