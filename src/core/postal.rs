use regex::Regex;
use std::sync::LazyLock;

// ZIP 或 ZIP+4，僅檢查格式
static US_POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("postal code pattern is valid"));

pub fn is_valid_us_postal_code(text: &str) -> bool {
    US_POSTAL_CODE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_and_zip_plus_four() {
        assert!(is_valid_us_postal_code("12345"));
        assert!(is_valid_us_postal_code("12345-6789"));
        assert!(is_valid_us_postal_code("00501"));
    }

    #[test]
    fn test_rejects_malformed_codes() {
        assert!(!is_valid_us_postal_code("1234"));
        assert!(!is_valid_us_postal_code("ABCDE"));
        assert!(!is_valid_us_postal_code("123456"));
        assert!(!is_valid_us_postal_code("12345-678"));
        assert!(!is_valid_us_postal_code("12345 6789"));
        assert!(!is_valid_us_postal_code(" 12345"));
        assert!(!is_valid_us_postal_code(""));
        // 全形數字不算
        assert!(!is_valid_us_postal_code("１２３４５"));
    }
}
