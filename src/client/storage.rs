//! Browser `localStorage` access through the renderer's JS bridge.

use dioxus::prelude::*;

/// Reads a value; `None` when absent or when the bridge fails.
pub async fn load(key: &str) -> Option<String> {
    document::eval(&format!("return localStorage.getItem({:?});", key))
        .join::<Option<String>>()
        .await
        .ok()
        .flatten()
}

pub fn save(key: &str, value: &str) {
    document::eval(&format!("localStorage.setItem({:?}, {:?});", key, value));
}

pub fn remove(key: &str) {
    document::eval(&format!("localStorage.removeItem({:?});", key));
}
