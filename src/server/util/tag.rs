//! Canonical form for clan and player tags.
//!
//! Every tag entering the system goes through [`normalize_tag`] so that the upstream
//! client, stored rows, and queue keys agree on one spelling: `#` followed by
//! uppercase ASCII alphanumerics.

use crate::server::error::AppError;

/// Normalizes a clan or player tag to its canonical form.
///
/// Trims whitespace, strips leading `#` characters, uppercases ASCII, and prefixes a
/// single `#`.
///
/// # Arguments
/// - `raw` - Tag as typed by a user or returned by upstream (`"#2pp"`, `" 2PP "`, ...)
///
/// # Returns
/// - `Ok(String)` - Canonical tag, e.g. `"#2PP"`
/// - `Err(AppError::BadRequest)` - Empty remainder or non-alphanumeric characters
pub fn normalize_tag(raw: &str) -> Result<String, AppError> {
    let code = raw.trim().trim_start_matches('#');

    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::BadRequest("Invalid tag".to_string()));
    }

    Ok(format!("#{}", code.to_ascii_uppercase()))
}

/// Queue dedup key for a clan's ingestion job.
pub fn clan_job_key(canonical_clan_tag: &str) -> String {
    format!("clan-{}", canonical_clan_tag)
}
