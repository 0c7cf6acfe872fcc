//! Letter and digit sections - ASCII lowercase, uppercase and digits.

use super::SectionResult;

const LOWERCASE_POOL: usize = 26;
const UPPERCASE_POOL: usize = 26;
const DIGIT_POOL: usize = 10;

fn contribution(password: &str, pool: usize, class: fn(&char) -> bool) -> SectionResult {
    if password.chars().any(|c| class(&c)) {
        pool
    } else {
        0
    }
}

/// Adds 26 if the password holds an ASCII lowercase letter.
pub fn lowercase_section(password: &str) -> SectionResult {
    contribution(password, LOWERCASE_POOL, char::is_ascii_lowercase)
}

/// Adds 26 if the password holds an ASCII uppercase letter.
pub fn uppercase_section(password: &str) -> SectionResult {
    contribution(password, UPPERCASE_POOL, char::is_ascii_uppercase)
}

/// Adds 10 if the password holds an ASCII digit.
pub fn digit_section(password: &str) -> SectionResult {
    contribution(password, DIGIT_POOL, char::is_ascii_digit)
}
