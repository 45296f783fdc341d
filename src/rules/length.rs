//! Length rule - checks password minimum length.

/// Minimum number of characters a password must have.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length requirement.
///
/// Length is counted in UTF-16 code units, the way a browser input reports
/// it: accented letters count once, characters outside the BMP count twice.
pub fn has_min_length(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_LENGTH
}
