//! Word filtering module
//!
//! A token becomes a word when it is long enough and its characters match the
//! active character-class policy as a whole.

use regex::Regex;
use std::fmt;

/// Character-class policy applied to every token of a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordPolicy {
    /// Only lowercase ASCII letters
    Lowercase,
    /// Only uppercase ASCII letters (acronyms, shouted words)
    AllCaps,
    /// An uppercase ASCII letter followed by ASCII letters of any case
    Capitalized,
}

impl WordPolicy {
    /// Anchored regex for this policy
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Lowercase => patterns::LOWERCASE_ONLY,
            Self::AllCaps => patterns::UPPERCASE_ONLY,
            Self::Capitalized => patterns::CAPITALIZED,
        }
    }

    /// Whether this policy selects the uppercase/capitalized list
    pub fn is_caps(self) -> bool {
        !matches!(self, Self::Lowercase)
    }
}

impl fmt::Display for WordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lowercase => "lowercase",
            Self::AllCaps => "all-caps",
            Self::Capitalized => "capitalized",
        };
        f.write_str(name)
    }
}

/// Length and character-class filter for one pass
#[derive(Debug, Clone)]
pub struct WordFilter {
    min_length: usize,
    policy: WordPolicy,
    pattern: Regex,
}

impl WordFilter {
    /// Create a filter accepting tokens of at least `min_length` characters
    pub fn new(min_length: usize, policy: WordPolicy) -> anyhow::Result<Self> {
        if min_length == 0 {
            anyhow::bail!("Minimum word length must be at least 1");
        }

        let pattern = Regex::new(policy.pattern())
            .map_err(|e| anyhow::anyhow!("Invalid regex pattern '{}': {}", policy.pattern(), e))?;

        Ok(Self { min_length, policy, pattern })
    }

    /// Check if a token is accepted as a word
    #[inline]
    pub fn matches(&self, token: &str) -> bool {
        // Fast byte-length check first for ASCII-only optimization
        let len = if token.is_ascii() {
            token.len()
        } else {
            token.chars().count()
        };

        len >= self.min_length && self.pattern.is_match(token)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn policy(&self) -> WordPolicy {
        self.policy
    }
}

/// Regex patterns backing the word policies
pub mod patterns {
    /// Only lowercase letters
    pub const LOWERCASE_ONLY: &str = r"^[a-z]+$";

    /// Only uppercase letters
    pub const UPPERCASE_ONLY: &str = r"^[A-Z]+$";

    /// Capital followed by letters of any case
    pub const CAPITALIZED: &str = r"^[A-Z][a-zA-Z]*$";
}
