//! Character variety rules - lowercase, uppercase, digits, special characters.
//!
//! Letter and digit classes are ASCII only: `é` is neither a lowercase letter
//! nor alphanumeric here, so it counts as a special character.

/// Whitespace as browsers match `\s`: Unicode whitespace except U+0085,
/// plus U+FEFF.
pub(crate) fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Anything that is neither an ASCII letter or digit nor whitespace.
pub fn has_special(password: &str) -> bool {
    password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !is_js_whitespace(c))
}
