//! CPF (Cadastro de Pessoas Físicas) normalisation and checksum validation.
//!
//! A CPF is 11 digits: nine base digits followed by two verifier digits, each
//! computed with a descending-weight mod-11 sum over the digits before it.
//! CPFs made of a single repeated digit satisfy the arithmetic but are not
//! issued, so they are rejected.

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Strips every non-digit character, e.g. `"529.982.247-25"` → `"52998224725"`.
pub fn clean_cpf(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates a digit-only CPF.
///
/// # Arguments
/// - `cpf` - CPF string; must already be digit-only (see `clean_cpf`)
///
/// # Returns
/// - `true` - 11 digits, not all identical, both verifier digits match
/// - `false` - Anything else
pub fn is_valid_cpf(cpf: &str) -> bool {
    if cpf.len() != CPF_LENGTH {
        return false;
    }

    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != CPF_LENGTH {
        return false;
    }

    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    verifier_digit(&digits[..9]) == digits[9] && verifier_digit(&digits[..10]) == digits[10]
}

/// Computes the verifier digit for the given prefix (9 or 10 digits).
fn verifier_digit(prefix: &[u32]) -> u32 {
    let first_weight = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| d * (first_weight - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}
