use std::sync::OnceLock;

use regex::Regex;

use crate::errors::AppError;

/// Uploads above this size are rejected before any model call.
pub const MAX_CONTENT_BYTES: usize = 5 * 1024 * 1024;

pub const MISSING_INFORMATION: &str = "Please provide all required information.";

fn heading_marker() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| Regex::new(r"(?m)^#{1,6}\s+").expect("heading pattern is valid"))
}

/// Strips markdown heading markers at line starts, then trims the whole text.
pub fn sanitize_content(raw: &str) -> String {
    heading_marker().replace_all(raw, "").trim().to_string()
}

/// Checks a submission and returns its sanitized content.
///
/// File content, job role and location are all required. Content is measured
/// before sanitizing; a CV that is only headings counts as missing.
pub fn prepare_submission(raw: &str, job_role: &str, location: &str) -> Result<String, AppError> {
    if raw.len() > MAX_CONTENT_BYTES {
        return Err(AppError::PayloadTooLarge(format!(
            "CV content must be at most {} MB",
            MAX_CONTENT_BYTES / (1024 * 1024)
        )));
    }

    if job_role.trim().is_empty() || location.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INFORMATION.to_string()));
    }

    let content = sanitize_content(raw);
    if content.is_empty() {
        return Err(AppError::Validation(MISSING_INFORMATION.to_string()));
    }

    Ok(content)
}
