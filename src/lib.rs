//! Secure password generation library
//!
//! This library generates random passwords from a cryptographically
//! secure source and estimates their strength from charset entropy.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable batches and channel-based helpers
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GEN_LENGTH`: Password length (default: 16)
//! - `PWD_GEN_CATEGORIES`: Comma separated categories
//!   (default: `upper,lower,digits,symbols`)
//! - `PWD_GEN_EXCLUDE_AMBIGUOUS`: Drop look-alike characters (default: `false`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{generate_password, calculate_strength, GenerationOptions};
//!
//! let options = GenerationOptions::from_env().expect("Invalid configuration");
//! let password = generate_password(&options).expect("No secure random source");
//!
//! let assessment = calculate_strength(&password);
//! println!("Entropy: {:.1} bits", assessment.entropy_bits);
//! println!("Strength: {}", assessment.tier);
//! ```

// Internal modules
mod charset;
mod composer;
mod evaluator;
mod options;
mod random;
mod sections;

// Public API
pub use charset::{is_similar, CharacterCategory, SIMILAR_CHARACTERS};
pub use composer::{
    build_pool, generate_batch, generate_batch_with, generate_password, generate_password_with,
    guaranteed_characters,
};
pub use evaluator::{
    calculate_strength, calculate_strength_str, estimate_charset_size, StrengthAssessment,
    StrengthTier,
};
pub use options::{GenerationOptions, OptionsError, DEFAULT_LENGTH, MAX_LENGTH};
pub use random::{csprng, secure_random_int, secure_shuffle, RandomError};
pub use sections::SYMBOL_POOL_ESTIMATE;

#[cfg(feature = "async")]
pub use composer::{generate_batch_tx, generate_batch_tx_with};

#[cfg(feature = "async")]
pub use evaluator::calculate_strength_tx;

pub use secrecy::{ExposeSecret, SecretString};
