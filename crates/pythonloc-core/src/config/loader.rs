//! Environment lookup helpers.
//!
//! Keeps the primary-then-alias fallback chain in one place instead of
//! repeating `or_else` in callers. Nothing here writes the environment.

use std::env;

fn lookup(primary: &str, aliases: &[&str]) -> Option<String> {
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
}

/// Read the primary key or the first set alias, falling back to `default`.
/// Empty values count as unset.
pub fn env_or<F>(primary: &str, aliases: &[&str], default: F) -> String
where
    F: FnOnce() -> String,
{
    lookup(primary, aliases)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default)
}

/// Like [`env_or`] but returns `None` when unset or blank.
pub fn env_optional(primary: &str, aliases: &[&str]) -> Option<String> {
    lookup(primary, aliases).and_then(|s| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    })
}

/// Parse a boolean variable: 0/false/no/off are false, any other value is true.
pub fn env_bool(primary: &str, aliases: &[&str], default: bool) -> bool {
    match lookup(primary, aliases).as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}
