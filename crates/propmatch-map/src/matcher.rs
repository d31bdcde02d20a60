//! Token matching between source and destination property names.
//!
//! Every source token is classified against the destination tokens in two
//! steps:
//!
//! 1. **Positional**: the destination token at the same index, if it is still
//!    available, matching exactly ([`MatchStrength::Exact`]) or ignoring case
//!    ([`MatchStrength::IgnoringCase`]).
//! 2. **Scan**: the lowest-index available destination token matching exactly
//!    ([`MatchStrength::IgnoringTokenPosition`]); failing that, the lowest-index
//!    one matching ignoring case
//!    ([`MatchStrength::IgnoringCaseAndTokenPosition`]).
//!
//! A matched destination token is consumed and cannot satisfy another source
//! token. The assignment is greedy, left to right, and is not a globally
//! optimal alignment. After all source tokens are classified, one
//! [`MatchStrength::None`] is appended per destination token never consumed.
//! Those trailing entries carry no reference back to the tokens they stand for.

use std::iter;

use propmatch_model::{MatchStrength, Property};
use tracing::{debug, trace};

use crate::config::MatchingConfig;
use crate::flatten::flatten_tokens;

/// Matches property lists by their name tokens.
#[derive(Debug, Clone, Copy)]
pub struct PropertiesMatcher<'a> {
    config: &'a MatchingConfig,
}

impl<'a> PropertiesMatcher<'a> {
    pub fn new(config: &'a MatchingConfig) -> Self {
        Self { config }
    }

    /// Classify every source token against the destination tokens.
    ///
    /// The result holds one entry per flattened source token, in order,
    /// followed by one [`MatchStrength::None`] per destination token left
    /// unmatched.
    pub fn match_properties(
        &self,
        source: &[Property],
        destination: &[Property],
    ) -> Vec<MatchStrength> {
        let source_tokens = flatten_tokens(source, self.config.source_tokenizer());
        let destination_tokens = flatten_tokens(destination, self.config.destination_tokenizer());

        debug!(
            source_properties = source.len(),
            destination_properties = destination.len(),
            source_tokens = source_tokens.len(),
            destination_tokens = destination_tokens.len(),
            "matching property tokens"
        );

        match_tokens(&source_tokens, &destination_tokens)
    }
}

/// Classify each source token against a working copy of the destination tokens.
///
/// Neither input is modified; consumption is tracked privately for the
/// duration of the call.
pub fn match_tokens<S, D>(source: &[S], destination: &[D]) -> Vec<MatchStrength>
where
    S: AsRef<str>,
    D: AsRef<str>,
{
    let mut consumed = vec![false; destination.len()];
    let mut strengths = Vec::with_capacity(source.len());

    for (index, token) in source.iter().enumerate() {
        let token = token.as_ref();
        let strength = positional_match(token, index, destination, &mut consumed)
            .unwrap_or_else(|| scan_match(token, destination, &mut consumed));
        trace!(index, token, strength = %strength, "classified source token");
        strengths.push(strength);
    }

    let unmatched = consumed.iter().filter(|used| !**used).count();
    if unmatched > 0 {
        debug!(unmatched, "destination tokens left unmatched");
    }
    strengths.extend(iter::repeat_n(MatchStrength::None, unmatched));
    strengths
}

fn positional_match<D: AsRef<str>>(
    token: &str,
    index: usize,
    destination: &[D],
    consumed: &mut [bool],
) -> Option<MatchStrength> {
    let candidate = destination.get(index)?.as_ref();
    if consumed[index] {
        return None;
    }

    let strength = if candidate == token {
        MatchStrength::Exact
    } else if eq_ignore_case(candidate, token) {
        MatchStrength::IgnoringCase
    } else {
        return None;
    };
    consumed[index] = true;
    Some(strength)
}

fn scan_match<D: AsRef<str>>(
    token: &str,
    destination: &[D],
    consumed: &mut [bool],
) -> MatchStrength {
    if let Some(found) = first_available(destination, consumed, |candidate| candidate == token) {
        consumed[found] = true;
        return MatchStrength::IgnoringTokenPosition;
    }
    if let Some(found) = first_available(destination, consumed, |candidate| {
        eq_ignore_case(candidate, token)
    }) {
        consumed[found] = true;
        return MatchStrength::IgnoringCaseAndTokenPosition;
    }
    MatchStrength::None
}

fn first_available<D: AsRef<str>>(
    destination: &[D],
    consumed: &[bool],
    matches: impl Fn(&str) -> bool,
) -> Option<usize> {
    destination
        .iter()
        .zip(consumed)
        .position(|(candidate, used)| !*used && matches(candidate.as_ref()))
}

/// Character-wise case-insensitive equality.
///
/// Two characters are equal if they are identical or their lowercase or
/// uppercase mappings agree. Strings of different character counts never match.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| char_eq_ignore_case(x, y))
}

fn char_eq_ignore_case(x: char, y: char) -> bool {
    x == y || x.to_lowercase().eq(y.to_lowercase()) || x.to_uppercase().eq(y.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strengths(source: &[&str], destination: &[&str]) -> Vec<MatchStrength> {
        match_tokens(source, destination)
    }

    #[test]
    fn identical_tokens_match_exactly() {
        assert_eq!(
            strengths(&["default", "Value"], &["default", "Value"]),
            vec![MatchStrength::Exact, MatchStrength::Exact]
        );
    }

    #[test]
    fn positional_case_difference() {
        assert_eq!(
            strengths(&["default", "Value"], &["Default", "Value"]),
            vec![MatchStrength::IgnoringCase, MatchStrength::Exact]
        );
    }

    #[test]
    fn exact_scan_runs_before_case_insensitive_scan() {
        // "Value" at index 1 is earlier but only a case-insensitive match.
        assert_eq!(
            strengths(&["value"], &["other", "Value", "value"]),
            vec![
                MatchStrength::IgnoringTokenPosition,
                MatchStrength::None,
                MatchStrength::None,
            ]
        );
    }

    #[test]
    fn scan_takes_lowest_available_index() {
        // The scan for "id" consumes index 0, leaving index 2 for the
        // positional match of the third token.
        assert_eq!(
            strengths(&["x", "id", "id"], &["id", "y", "id"]),
            vec![
                MatchStrength::None,
                MatchStrength::IgnoringTokenPosition,
                MatchStrength::Exact,
                MatchStrength::None,
            ]
        );
    }

    #[test]
    fn unmatched_positional_slot_stays_available() {
        assert_eq!(
            strengths(&["x", "b"], &["b", "y"]),
            vec![
                MatchStrength::None,
                MatchStrength::IgnoringTokenPosition,
                MatchStrength::None,
            ]
        );
    }

    #[test]
    fn greedy_scan_can_take_a_later_positional_match() {
        // An optimal alignment would match the last "name" in place.
        assert_eq!(
            strengths(&["name", "first", "name"], &["first", "x", "name"]),
            vec![
                MatchStrength::IgnoringTokenPosition,
                MatchStrength::IgnoringTokenPosition,
                MatchStrength::None,
                MatchStrength::None,
            ]
        );
    }

    #[test]
    fn empty_destination_yields_none_per_source_token() {
        assert_eq!(
            strengths(&["a", "b"], &[]),
            vec![MatchStrength::None, MatchStrength::None]
        );
    }

    #[test]
    fn empty_source_yields_padding_only() {
        assert_eq!(
            strengths(&[], &["a", "b", "c"]),
            vec![MatchStrength::None; 3]
        );
        assert!(strengths(&[], &[]).is_empty());
    }

    #[test]
    fn inputs_are_left_untouched() {
        let source = vec!["a".to_string(), "B".to_string()];
        let destination = vec!["b".to_string(), "a".to_string()];
        let _ = match_tokens(&source, &destination);
        assert_eq!(destination, vec!["b", "a"]);
        assert_eq!(source, vec!["a", "B"]);
    }

    #[test]
    fn case_folding_is_not_ascii_only() {
        assert!(eq_ignore_case("Été", "éTÉ"));
        assert!(eq_ignore_case("ΣΟΦΙΑ", "σοφια"));
        assert!(!eq_ignore_case("straße", "STRASSE"));
        assert!(!eq_ignore_case("value", "values"));
    }
}
