//! Character categories and their alphabets.

use std::fmt;
use std::str::FromStr;

/// Visually ambiguous glyphs dropped when ambiguity exclusion is enabled.
pub const SIMILAR_CHARACTERS: &str = "il1Lo0O";

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A class of characters a password can be composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterCategory {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterCategory {
    /// All categories in composition order.
    pub const ALL: [CharacterCategory; 4] = [
        CharacterCategory::Uppercase,
        CharacterCategory::Lowercase,
        CharacterCategory::Digits,
        CharacterCategory::Symbols,
    ];

    /// The full, ordered alphabet of this category.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterCategory::Uppercase => UPPERCASE,
            CharacterCategory::Lowercase => LOWERCASE,
            CharacterCategory::Digits => DIGITS,
            CharacterCategory::Symbols => SYMBOLS,
        }
    }

    /// The alphabet with similar characters removed when `exclude_ambiguous` is set.
    pub fn filtered_alphabet(self, exclude_ambiguous: bool) -> Vec<char> {
        self.alphabet()
            .chars()
            .filter(|c| !exclude_ambiguous || !is_similar(*c))
            .collect()
    }

    /// Short name used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            CharacterCategory::Uppercase => "upper",
            CharacterCategory::Lowercase => "lower",
            CharacterCategory::Digits => "digits",
            CharacterCategory::Symbols => "symbols",
        }
    }
}

/// Returns `true` if `c` belongs to [`SIMILAR_CHARACTERS`].
pub fn is_similar(c: char) -> bool {
    SIMILAR_CHARACTERS.contains(c)
}

impl fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharacterCategory::Uppercase),
            "lower" | "lowercase" => Ok(CharacterCategory::Lowercase),
            "digits" | "digit" | "numbers" => Ok(CharacterCategory::Digits),
            "symbols" | "symbol" | "special" => Ok(CharacterCategory::Symbols),
            other => Err(format!("unknown character category '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabets_disjoint_and_non_empty() {
        let mut seen = HashSet::new();
        for category in CharacterCategory::ALL {
            assert!(!category.alphabet().is_empty());
            for c in category.alphabet().chars() {
                assert!(seen.insert(c), "'{}' appears in two alphabets", c);
            }
        }
        assert_eq!(seen.len(), 94);
    }

    #[test]
    fn test_symbols_cover_printable_punctuation() {
        let symbols = CharacterCategory::Symbols.alphabet();
        assert_eq!(symbols.len(), 32);
        assert!(symbols.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_filtered_alphabet_drops_similar() {
        let digits = CharacterCategory::Digits.filtered_alphabet(true);
        assert_eq!(digits.iter().collect::<String>(), "23456789");

        let upper = CharacterCategory::Uppercase.filtered_alphabet(true);
        assert!(!upper.contains(&'O'));
        assert!(!upper.contains(&'L'));
        assert!(upper.contains(&'I'));
        assert_eq!(upper.len(), 24);
    }

    #[test]
    fn test_filtered_alphabet_untouched_without_exclusion() {
        let lower = CharacterCategory::Lowercase.filtered_alphabet(false);
        assert_eq!(lower.len(), 26);
    }

    #[test]
    fn test_category_parse_and_display() {
        for category in CharacterCategory::ALL {
            let parsed: CharacterCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert_eq!(" Special ".parse::<CharacterCategory>(), Ok(CharacterCategory::Symbols));
        assert!("emoji".parse::<CharacterCategory>().is_err());
    }
}
