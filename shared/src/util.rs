//! Small shared utilities

use chrono::Utc;

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Minimal email shape check: a single `@` with text on both sides.
///
/// Deliberately lax, the storefront only needs to catch obvious typos.
pub fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("guest@example.com"));
        assert!(looks_like_email("a@b"));
        assert!(!looks_like_email("no-at-sign"));
        assert!(!looks_like_email("@domain"));
        assert!(!looks_like_email("local@"));
    }
}
