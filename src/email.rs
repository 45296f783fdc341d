//! Email format check.
//!
//! Deliberately permissive: one `@`, no whitespace, and a dot somewhere in
//! the domain part. TLD length, repeated dots and internationalized domains
//! are not checked. Whitespace is the set browsers match with `\s`, which
//! adds U+FEFF to Unicode whitespace and leaves out U+0085.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that may not appear in any part of the address: `@` and
/// browser whitespace.
const PART: &str = r"[^@\x{09}-\x{0D}\x{20}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{PART}@{PART}\.{PART}$")).expect("Failed to compile email regex")
});

/// Returns `true` if `value` looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "user@example.com",
            "user.name@example.com",
            "user+tag@example.co.uk",
            "a@b.c",
            "USER@EXAMPLE.COM",
            "usuário@exemplo.com.br",
            "user@example..com",
            "user@exa\u{0085}mple.com",
        ];

        for email in valid_emails {
            assert!(is_valid_email(email), "Should accept email: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid_emails = vec![
            "",
            " ",
            "user@@example",
            "userexample.com",
            "user@example",
            "@example.com",
            "user@.com",
            "user@example.",
            "user name@example.com",
            " user@example.com",
            "user@example.com ",
            "user@exa@mple.com",
            "user@exa\u{FEFF}mple.com",
            "\u{FEFF}user@example.com",
            "user@example.c\u{FEFF}",
            "user@exa\u{3000}mple.com",
            "user\u{2028}@example.com",
        ];

        for email in invalid_emails {
            assert!(!is_valid_email(email), "Should reject email: {:?}", email);
        }
    }
}
