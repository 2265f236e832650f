//! Email subscription rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Source recorded when the caller does not supply one.
pub const DEFAULT_SOURCE: &str = "dragon-page";

/// Status assigned to new subscriptions.
pub const STATUS_ACTIVE: &str = "active";

/// Every status a subscription may hold.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, "unsubscribed", "bounced"];

/// Maximum email length accepted (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of a source tag.
pub const MAX_SOURCE_LENGTH: usize = 64;

/// Loose shape check: something, `@`, something, `.`, something; no whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Trim and lowercase an email so duplicates compare equal.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate an email address as submitted by the subscribe form.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CoreError::Validation("Email is required".to_string()));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(CoreError::Validation(format!(
            "Email exceeds maximum length of {MAX_EMAIL_LENGTH} characters"
        )));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(CoreError::Validation("Invalid email format".to_string()));
    }
    Ok(())
}

/// Resolve the source tag, defaulting blank or missing values.
pub fn resolve_source(source: Option<&str>) -> Result<String, CoreError> {
    let source = source.map(str::trim).filter(|s| !s.is_empty());
    match source {
        None => Ok(DEFAULT_SOURCE.to_string()),
        Some(s) if s.len() > MAX_SOURCE_LENGTH => Err(CoreError::Validation(format!(
            "Source exceeds maximum length of {MAX_SOURCE_LENGTH} characters"
        ))),
        Some(s) => Ok(s.to_string()),
    }
}
