//! Match strength classification for name tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// How confidently a source token corresponds to a destination token.
///
/// Variants are declared best to worst, so the derived ordering agrees with
/// [`MatchStrength::priority`]: a smaller value is a better match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStrength {
    /// Same token at the same position, case-sensitive equal.
    Exact,
    /// Same token at the same position, equal only when ignoring case.
    IgnoringCase,
    /// Case-sensitive equal token found at a different position.
    IgnoringTokenPosition,
    /// Case-insensitive equal token found at a different position.
    IgnoringCaseAndTokenPosition,
    /// No matching token anywhere.
    None,
}

impl MatchStrength {
    /// All strengths, best first.
    pub const ALL: [MatchStrength; 5] = [
        Self::Exact,
        Self::IgnoringCase,
        Self::IgnoringTokenPosition,
        Self::IgnoringCaseAndTokenPosition,
        Self::None,
    ];

    /// Numeric priority used when ranking matches. Lower is better.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Exact => 0,
            Self::IgnoringCase => 1,
            Self::IgnoringTokenPosition => 2,
            Self::IgnoringCaseAndTokenPosition => 3,
            Self::None => 100,
        }
    }

    /// Returns false only for [`MatchStrength::None`].
    #[must_use]
    pub const fn is_match(self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "EXACT",
            Self::IgnoringCase => "IGNORING_CASE",
            Self::IgnoringTokenPosition => "IGNORING_TOKEN_POSITION",
            Self::IgnoringCaseAndTokenPosition => "IGNORING_CASE_AND_TOKEN_POSITION",
            Self::None => "NONE",
        }
    }

    /// Short human-readable meaning.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Exact => "same token, same position, case-sensitive equal",
            Self::IgnoringCase => "same token, same position, equal ignoring case",
            Self::IgnoringTokenPosition => "equal token found at a different position",
            Self::IgnoringCaseAndTokenPosition => {
                "token equal ignoring case found at a different position"
            }
            Self::None => "no matching token found",
        }
    }
}

impl fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStrength {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|strength| strength.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ModelError::UnknownMatchStrength(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_agrees_with_priority() {
        for pair in MatchStrength::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].priority() < pair[1].priority());
        }
    }

    #[test]
    fn none_is_worst() {
        let worst = MatchStrength::ALL.into_iter().max().unwrap();
        assert_eq!(worst, MatchStrength::None);
        assert_eq!(worst.priority(), 100);
        assert!(!worst.is_match());
    }

    #[test]
    fn parses_names_leniently() {
        assert_eq!(
            "ignoring-case".parse::<MatchStrength>().unwrap(),
            MatchStrength::IgnoringCase
        );
        assert_eq!(
            " IGNORING_CASE_AND_TOKEN_POSITION ".parse::<MatchStrength>().unwrap(),
            MatchStrength::IgnoringCaseAndTokenPosition
        );
        assert!(matches!(
            "fuzzy".parse::<MatchStrength>(),
            Err(ModelError::UnknownMatchStrength(_))
        ));
    }
}
