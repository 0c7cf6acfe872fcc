//! Symbol section - everything that is not an ASCII letter or digit.

use super::SectionResult;

/// Charset size credited for symbols. A fixed approximation of the
/// printable symbol range, independent of any configured symbol alphabet.
pub const SYMBOL_POOL_ESTIMATE: usize = 32;

/// Adds [`SYMBOL_POOL_ESTIMATE`] if the password holds any character
/// outside `[a-zA-Z0-9]`.
pub fn symbol_section(password: &str) -> SectionResult {
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        SYMBOL_POOL_ESTIMATE
    } else {
        0
    }
}
