//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a checksum-valid CPF from a numeric seed.
///
/// The seed is zero-padded to the 9 base digits and both verifier digits are
/// appended. Seeds that would produce nine identical digits are shifted so the
/// result is never one of the rejected repeated-digit CPFs.
///
/// # Arguments
/// - `seed` - Any number; only the lowest nine decimal digits are used
///
/// # Returns
/// - `String` - 11-digit CPF that passes checksum validation
pub fn cpf_from_seed(seed: u64) -> String {
    let mut base = seed % 1_000_000_000;
    if base % 111_111_111 == 0 {
        base += 1;
    }

    let mut digits: Vec<u32> = format!("{:09}", base)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    for len in [9usize, 10] {
        let sum: u32 = digits
            .iter()
            .take(len)
            .enumerate()
            .map(|(i, d)| d * (len as u32 + 1 - i as u32))
            .sum();
        let check = (sum * 10) % 11;
        digits.push(if check == 10 { 0 } else { check });
    }

    digits.iter().map(|d| char::from(b'0' + *d as u8)).collect()
}
