//! Mod identity rule.
//!
//! Ids compare case-insensitively after trimming. Everything downstream
//! stores and emits ids in the normalized form produced here.

/// Normalize a raw id: trim surrounding whitespace and lower-case it.
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}
