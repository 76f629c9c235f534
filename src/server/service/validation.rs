//! Submission validation rules.
//!
//! `validate_submission` is a pure function: it receives the raw payload and the
//! volantes already stored and either returns a canonical `NewVolante` or the first
//! rule that failed.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::{
    model::volante::{MAX_NUMBER, MAX_SELECTION, MIN_NAME_LENGTH, MIN_NUMBER, MIN_SELECTION},
    server::{
        error::validation::ValidationError,
        model::volante::{identity_key, NewVolante, SubmissionPayload, Volante},
    },
    util::cpf::{clean_cpf, is_valid_cpf},
};

/// Validates a submission against the business rules and the existing volantes.
///
/// Rules are checked in order and the first failure is returned:
/// 1. name, CPF and a numbers array are present
/// 2. trimmed name has at least 3 characters
/// 3. CPF (digits only) passes the checksum
/// 4. every number is an integer in 1..=60 and none repeats
/// 5. between 6 and 10 numbers were chosen
/// 6. nobody with the same CPF and name (case-insensitive) has a volante yet
///
/// # Arguments
/// - `payload` - Raw submission body
/// - `existing` - Every stored volante
///
/// # Returns
/// - `Ok(NewVolante)` - Trimmed name, digit-only CPF and ascending unique numbers
/// - `Err(ValidationError)` - First rule that failed
pub fn validate_submission(
    payload: &SubmissionPayload,
    existing: &[Volante],
) -> Result<NewVolante, ValidationError> {
    let (name, cpf, numbers) = match (&payload.name, &payload.cpf, &payload.numbers) {
        (Some(name), Some(cpf), Some(Value::Array(numbers)))
            if !name.is_empty() && !cpf.is_empty() =>
        {
            (name, cpf, numbers)
        }
        _ => return Err(ValidationError::MissingFields),
    };

    let name = name.trim();
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::NameTooShort);
    }

    let cpf = clean_cpf(cpf);
    if !is_valid_cpf(&cpf) {
        return Err(ValidationError::InvalidCpf);
    }

    let unique: BTreeSet<u8> = numbers
        .iter()
        .filter_map(coerce_number)
        .filter(|n| (i64::from(MIN_NUMBER)..=i64::from(MAX_NUMBER)).contains(n))
        .map(|n| n as u8)
        .collect();
    if unique.len() != numbers.len() {
        return Err(ValidationError::DuplicateOrOutOfRangeNumbers);
    }

    if !(MIN_SELECTION..=MAX_SELECTION).contains(&unique.len()) {
        return Err(ValidationError::CountOutOfRange);
    }

    let key = identity_key(name, &cpf);
    if existing.iter().any(|v| v.identity_key() == key) {
        return Err(ValidationError::DuplicateSubmission);
    }

    Ok(NewVolante {
        name: name.to_string(),
        cpf,
        numbers: unique.into_iter().collect(),
    })
}

/// Interprets one element of the numbers array as an integer.
///
/// Integers, floats without a fractional part and decimal numeric strings are accepted;
/// booleans, hex or binary strings and everything else yield `None`.
fn coerce_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}
