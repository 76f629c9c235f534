//! System configuration keys and typed accessors.

/// Whether new volantes may be submitted. Stored as `"true"` / `"false"`.
pub const ACCEPT_NEW_ENTRIES_KEY: &str = "accept_new_entries";

/// Value assumed when the flag has never been written.
pub const ACCEPT_NEW_ENTRIES_DEFAULT: bool = true;

/// Parses a stored boolean flag.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Encodes a boolean flag for storage.
pub fn encode_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
