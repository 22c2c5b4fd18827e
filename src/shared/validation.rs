use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for phone numbers in loose E.164 form
    /// - Valid: "+15550001111", "5550001111"
    /// - Invalid: "555-000", "phone", "+1 555"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{7,15}$").unwrap();

    /// Regex for incident tags: lowercase alphanumeric with hyphens
    /// - Valid: "break-in", "night", "repeat-offender"
    /// - Invalid: "-tag", "tag-", "Tag", "two words"
    pub static ref TAG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+15550001111"));
        assert!(PHONE_REGEX.is_match("5550001111"));
        assert!(PHONE_REGEX.is_match("08123456"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("555-000"));
        assert!(!PHONE_REGEX.is_match("phone"));
        assert!(!PHONE_REGEX.is_match("+1 555"));
        assert!(!PHONE_REGEX.is_match(""));
    }

    #[test]
    fn test_tag_regex() {
        assert!(TAG_REGEX.is_match("break-in"));
        assert!(TAG_REGEX.is_match("night"));
        assert!(!TAG_REGEX.is_match("-tag"));
        assert!(!TAG_REGEX.is_match("Tag"));
        assert!(!TAG_REGEX.is_match("two words"));
    }
}
