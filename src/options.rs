//! Generation options and their environment configuration.

use std::collections::BTreeSet;
use thiserror::Error;

use crate::charset::CharacterCategory;

/// Length used when none is configured.
pub const DEFAULT_LENGTH: usize = 16;

/// Longest password [`GenerationOptions::validate`] accepts.
pub const MAX_LENGTH: usize = 1024;

pub const ENV_LENGTH: &str = "PWD_GEN_LENGTH";
pub const ENV_CATEGORIES: &str = "PWD_GEN_CATEGORIES";
pub const ENV_EXCLUDE_AMBIGUOUS: &str = "PWD_GEN_EXCLUDE_AMBIGUOUS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptionsError {
    #[error("At least one character category must be enabled")]
    NoCategories,
    #[error("Password length must be between 1 and {max}, got {length}")]
    InvalidLength { length: usize, max: usize },
    #[error("Invalid value for {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },
}

/// What to generate. Built by the caller and handed to the composer,
/// which only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub categories: BTreeSet<CharacterCategory>,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            categories: CharacterCategory::ALL.into_iter().collect(),
            exclude_ambiguous: false,
        }
    }
}

impl GenerationOptions {
    /// Options with the given length and no categories enabled.
    pub fn empty(length: usize) -> Self {
        Self {
            length,
            categories: BTreeSet::new(),
            exclude_ambiguous: false,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_category(mut self, category: CharacterCategory) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn without_category(mut self, category: CharacterCategory) -> Self {
        self.categories.remove(&category);
        self
    }

    pub fn exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }

    /// Enabled categories in composition order.
    pub fn enabled(&self) -> impl Iterator<Item = CharacterCategory> + '_ {
        self.categories.iter().copied()
    }

    /// Checks the caller-side contract before generation.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No category is enabled
    /// - Length is zero or above [`MAX_LENGTH`]
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.categories.is_empty() {
            return Err(OptionsError::NoCategories);
        }
        if self.length == 0 || self.length > MAX_LENGTH {
            return Err(OptionsError::InvalidLength {
                length: self.length,
                max: MAX_LENGTH,
            });
        }
        Ok(())
    }

    /// Builds options from the environment, starting from the defaults.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_GEN_LENGTH`: password length
    /// - `PWD_GEN_CATEGORIES`: comma separated list of `upper`, `lower`,
    ///   `digits`, `symbols`
    /// - `PWD_GEN_EXCLUDE_AMBIGUOUS`: `true`/`false` (also `1`/`0`, `yes`/`no`)
    ///
    /// # Errors
    ///
    /// Returns error if a variable cannot be parsed or the resulting
    /// options fail [`GenerationOptions::validate`].
    pub fn from_env() -> Result<Self, OptionsError> {
        let mut options = Self::default();

        if let Some(raw) = read_env(ENV_LENGTH) {
            options.length = raw.trim().parse().map_err(|e| invalid_env(ENV_LENGTH, e))?;
        }

        if let Some(raw) = read_env(ENV_CATEGORIES) {
            options.categories = raw
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(str::parse::<CharacterCategory>)
                .collect::<Result<_, _>>()
                .map_err(|e| invalid_env(ENV_CATEGORIES, e))?;
        }

        if let Some(raw) = read_env(ENV_EXCLUDE_AMBIGUOUS) {
            options.exclude_ambiguous = parse_flag(&raw).ok_or_else(|| {
                invalid_env(ENV_EXCLUDE_AMBIGUOUS, format!("'{}' is not a boolean", raw))
            })?;
        }

        options.validate()?;
        Ok(options)
    }
}

fn read_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

fn invalid_env(var: &'static str, reason: impl ToString) -> OptionsError {
    let reason = reason.to_string();
    #[cfg(feature = "tracing")]
    tracing::warn!("Invalid generation config {}: {}", var, reason);
    OptionsError::InvalidEnv { var, reason }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn clear_env() {
        remove_env(ENV_LENGTH);
        remove_env(ENV_CATEGORIES);
        remove_env(ENV_EXCLUDE_AMBIGUOUS);
    }

    #[test]
    fn test_default_options() {
        let options = GenerationOptions::default();
        assert_eq!(options.length, 16);
        assert_eq!(options.categories.len(), 4);
        assert!(!options.exclude_ambiguous);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn test_enabled_follows_composition_order() {
        let options = GenerationOptions::empty(8)
            .with_category(CharacterCategory::Symbols)
            .with_category(CharacterCategory::Uppercase)
            .with_category(CharacterCategory::Digits);
        let order: Vec<_> = options.enabled().collect();
        assert_eq!(
            order,
            vec![
                CharacterCategory::Uppercase,
                CharacterCategory::Digits,
                CharacterCategory::Symbols
            ]
        );
    }

    #[test]
    fn test_without_category() {
        let options = GenerationOptions::default()
            .without_category(CharacterCategory::Symbols)
            .without_category(CharacterCategory::Digits);
        assert_eq!(
            options.enabled().collect::<Vec<_>>(),
            vec![CharacterCategory::Uppercase, CharacterCategory::Lowercase]
        );

        let none = options
            .without_category(CharacterCategory::Uppercase)
            .without_category(CharacterCategory::Lowercase);
        assert_eq!(none.validate(), Err(OptionsError::NoCategories));
    }

    #[test]
    fn test_validate_no_categories() {
        let options = GenerationOptions::empty(12);
        assert_eq!(options.validate(), Err(OptionsError::NoCategories));
    }

    #[test]
    fn test_validate_length_bounds() {
        let zero = GenerationOptions::default().with_length(0);
        assert!(matches!(zero.validate(), Err(OptionsError::InvalidLength { length: 0, .. })));

        let huge = GenerationOptions::default().with_length(MAX_LENGTH + 1);
        assert!(matches!(huge.validate(), Err(OptionsError::InvalidLength { .. })));

        let max = GenerationOptions::default().with_length(MAX_LENGTH);
        assert_eq!(max.validate(), Ok(()));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let options = GenerationOptions::from_env().unwrap();
        assert_eq!(options, GenerationOptions::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env(ENV_LENGTH, " 24 ");
        set_env(ENV_CATEGORIES, "lower, digits");
        set_env(ENV_EXCLUDE_AMBIGUOUS, "yes");

        let options = GenerationOptions::from_env().unwrap();
        assert_eq!(options.length, 24);
        assert_eq!(
            options.enabled().collect::<Vec<_>>(),
            vec![CharacterCategory::Lowercase, CharacterCategory::Digits]
        );
        assert!(options.exclude_ambiguous);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_length() {
        clear_env();
        set_env(ENV_LENGTH, "twelve");

        let result = GenerationOptions::from_env();
        assert!(matches!(result, Err(OptionsError::InvalidEnv { var: ENV_LENGTH, .. })));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_unknown_category() {
        clear_env();
        set_env(ENV_CATEGORIES, "upper,emoji");

        let result = GenerationOptions::from_env();
        match result {
            Err(OptionsError::InvalidEnv { var, reason }) => {
                assert_eq!(var, ENV_CATEGORIES);
                assert!(reason.contains("emoji"));
            }
            other => panic!("Expected InvalidEnv error, got {:?}", other),
        }

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_empty_categories_rejected() {
        clear_env();
        set_env(ENV_CATEGORIES, " , ");

        let result = GenerationOptions::from_env();
        assert_eq!(result, Err(OptionsError::NoCategories));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_flag() {
        clear_env();
        set_env(ENV_EXCLUDE_AMBIGUOUS, "maybe");

        let result = GenerationOptions::from_env();
        assert!(matches!(
            result,
            Err(OptionsError::InvalidEnv { var: ENV_EXCLUDE_AMBIGUOUS, .. })
        ));

        clear_env();
    }
}
