use regex::Regex;
use std::sync::LazyLock;

/// Minimum number of digits in a US phone number (area code + local number).
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Format check for an email address. No lookups.
pub fn is_valid_email(text: &str) -> bool {
    // regex crate 無 lookahead，開頭的點與連續的點另外檢查
    !text.starts_with('.') && !text.contains("..") && EMAIL.is_match(text)
}

/// The phone input adds `+`, spaces and punctuation around the digits, so
/// only the digits count.
pub fn is_valid_us_phone(text: &str) -> bool {
    text.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("jane.roe@example.com"));
        assert!(is_valid_email("o'brien+intake@mail.clinic.org"));
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email(".jane@example.com"));
        assert!(!is_valid_email("jane..roe@example.com"));
        assert!(!is_valid_email("jane.@example.com"));
        assert!(!is_valid_email("jane@-example.com"));
        assert!(!is_valid_email("jane@example.c"));
    }

    #[test]
    fn test_phone_digits() {
        assert!(is_valid_us_phone("+1 (555) 123-4567"));
        assert!(is_valid_us_phone("5551234567"));
        assert!(!is_valid_us_phone("+1 555 123"));
        assert!(!is_valid_us_phone(""));
    }
}
