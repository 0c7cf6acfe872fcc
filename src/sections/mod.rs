//! Character class sections
//!
//! Each section inspects a password for one character class and reports
//! how much that class adds to the estimated charset size.

mod letters;
mod symbols;

pub use letters::{digit_section, lowercase_section, uppercase_section};
pub use symbols::{symbol_section, SYMBOL_POOL_ESTIMATE};

/// Charset contribution of one class.
/// - `0` - Class absent from the password
/// - `n` - Class present, adds `n` possible characters
pub type SectionResult = usize;
