//! Password strength estimator - charset-based entropy and tiers.
//!
//! The estimate is `length * log2(charset size)`, where the charset size
//! is inferred from which character classes appear. It rewards length and
//! class breadth only: repeated or patterned passwords score as if every
//! character were drawn at random, so `"aaaaaaaa"` rates `Good`.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::sections::{digit_section, lowercase_section, symbol_section, uppercase_section};

/// Discrete strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    /// Nothing to evaluate (empty password).
    None,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Maps entropy bits to a tier. Lower bounds are inclusive.
    pub fn from_entropy(bits: f64) -> Self {
        match bits {
            b if b >= 128.0 => StrengthTier::VeryStrong,
            b if b >= 60.0 => StrengthTier::Strong,
            b if b >= 36.0 => StrengthTier::Good,
            b if b >= 28.0 => StrengthTier::Fair,
            _ => StrengthTier::Weak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::None => "None",
            StrengthTier::Weak => "Weak",
            StrengthTier::Fair => "Fair",
            StrengthTier::Good => "Good",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of [`calculate_strength`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthAssessment {
    pub entropy_bits: f64,
    pub tier: StrengthTier,
}

impl StrengthAssessment {
    fn empty() -> Self {
        Self {
            entropy_bits: 0.0,
            tier: StrengthTier::None,
        }
    }
}

/// Sums the charset contributions of every character class present.
///
/// Returns 0 for an empty password.
pub fn estimate_charset_size(password: &str) -> usize {
    // Orchestrator: every section adds its class size if present
    let sections: Vec<(&str, fn(&str) -> usize)> = vec![
        ("lowercase", lowercase_section),
        ("uppercase", uppercase_section),
        ("digits", digit_section),
        ("symbols", symbol_section),
    ];

    sections
        .into_iter()
        .map(|(_section_name, section_fn)| {
            let size = section_fn(password);
            #[cfg(feature = "tracing")]
            tracing::trace!("Charset section {} contributed {}", _section_name, size);
            size
        })
        .sum()
}

/// Estimates the strength of a plain (non-secret) string.
pub fn calculate_strength_str(password: &str) -> StrengthAssessment {
    if password.is_empty() {
        return StrengthAssessment::empty();
    }

    let charset_size = estimate_charset_size(password).max(1);
    let length = password.chars().count();
    let entropy_bits = length as f64 * (charset_size as f64).log2();

    StrengthAssessment {
        entropy_bits,
        tier: StrengthTier::from_entropy(entropy_bits),
    }
}

/// Estimates password strength.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthAssessment` with entropy bits and tier. An empty password
/// yields 0 bits and [`StrengthTier::None`].
pub fn calculate_strength(password: &SecretString) -> StrengthAssessment {
    calculate_strength_str(password.expose_secret())
}

/// Async version that sends the assessment via channel after a short
/// debounce.
#[cfg(feature = "async")]
pub async fn calculate_strength_tx(password: &SecretString, tx: mpsc::Sender<StrengthAssessment>) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("strength calculation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let assessment = calculate_strength(password);

    if let Err(_e) = tx.send(assessment).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength assessment: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_calculate_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let pwd = SecretString::new("TestPass123!".to_string().into());

        calculate_strength_tx(&pwd, tx).await;

        let assessment = rx.recv().await.expect("Should receive assessment");
        assert_eq!(assessment.tier, StrengthTier::Strong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_calculate_strength_tx_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let pwd = SecretString::new("short".to_string().into());
        calculate_strength_tx(&pwd, tx).await;
    }
}
