//! Rule-set compilation
//!
//! A rule set compiles into a single alternation: every pattern of every rule
//! becomes one named capture slot, in declaration order, joined with `|` and
//! anchored with `\A`. Matching a compiled rule set against the remaining
//! input therefore succeeds only at the current scan position, and the first
//! slot that captured non-empty text identifies the winning rule.
//!
//! Slots are named groups `r0`..`rN` rather than positional groups so that
//! patterns may contain capture groups of their own without disturbing slot
//! resolution. The parallel slot table maps each slot back to its rule's type
//! name and delegate.

use crate::relex::error::TokenizeError;
use crate::relex::rules::{Delegate, Rule, ANY_TYPE};
use regex::Regex;

/// One alternation slot: the pattern's group name and its rule's resolution
#[derive(Debug)]
pub(crate) struct Slot {
    pub group: String,
    pub type_name: String,
    pub delegate: Option<Delegate>,
}

/// A rule set compiled into one anchored alternation plus its slot table
#[derive(Debug)]
pub(crate) struct CompiledRuleset {
    pub regex: Regex,
    pub slots: Vec<Slot>,
}

/// Compile the ordered rules of `ruleset` into a single anchored matcher.
///
/// The combined pattern is `(?s)\A(?:(?P<r0>p0)|(?P<r1>p1)|…)`: dot matches
/// newline (patterns span lines), and `\A` pins the match to the start of the
/// slice being scanned - unmatched input fails fast instead of being skipped.
pub(crate) fn compile(rules: &[Rule], ruleset: Option<&str>) -> Result<CompiledRuleset, TokenizeError> {
    if rules.is_empty() {
        return Err(TokenizeError::EmptyRuleset {
            ruleset: ruleset.map(String::from),
        });
    }

    let mut slots: Vec<Slot> = Vec::new();
    let mut alternation = String::new();

    for rule in rules {
        if rule.patterns.is_empty() {
            return Err(TokenizeError::InvalidPattern {
                ruleset: ruleset.map(String::from),
                message: format!(
                    "rule '{}' has no patterns",
                    rule.name.as_deref().unwrap_or(ANY_TYPE)
                ),
            });
        }

        let type_name = rule.name.clone().unwrap_or_else(|| ANY_TYPE.to_string());

        for pattern in &rule.patterns {
            if !slots.is_empty() {
                alternation.push('|');
            }
            let group = format!("r{}", slots.len());
            alternation.push_str(&format!("(?P<{}>{})", group, pattern));
            slots.push(Slot {
                group,
                type_name: type_name.clone(),
                delegate: rule.delegate.clone(),
            });
        }
    }

    let combined = format!("(?s)\\A(?:{})", alternation);
    let regex = Regex::new(&combined).map_err(|e| TokenizeError::InvalidPattern {
        ruleset: ruleset.map(String::from),
        message: e.to_string(),
    })?;

    Ok(CompiledRuleset { regex, slots })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_slot_per_pattern() {
        let rules = [
            Rule::new("A", "a").pattern("aa"),
            Rule::new("B", "b"),
        ];
        let compiled = compile(&rules, None).unwrap();
        assert_eq!(compiled.slots.len(), 3);
        let groups: Vec<_> = compiled.slots.iter().map(|s| s.group.as_str()).collect();
        assert_eq!(groups, vec!["r0", "r1", "r2"]);
        // Both of A's slots resolve to A
        assert_eq!(compiled.slots[0].type_name, "A");
        assert_eq!(compiled.slots[1].type_name, "A");
        assert_eq!(compiled.slots[2].type_name, "B");
    }

    #[test]
    fn test_positional_rule_gets_any_type() {
        let rules = [Rule::any("\\s+")];
        let compiled = compile(&rules, None).unwrap();
        assert_eq!(compiled.slots[0].type_name, ANY_TYPE);
    }

    #[test]
    fn test_anchored_matching() {
        let rules = [Rule::new("A", "a")];
        let compiled = compile(&rules, None).unwrap();
        assert!(compiled.regex.is_match("abc"));
        // Never searches ahead for a match
        assert!(!compiled.regex.is_match("xa"));
    }

    #[test]
    fn test_dot_matches_newline() {
        let rules = [Rule::new("BLOCK", "\\{.*\\}")];
        let compiled = compile(&rules, None).unwrap();
        assert!(compiled.regex.is_match("{a\nb}"));
    }

    #[test]
    fn test_patterns_may_contain_their_own_groups() {
        let rules = [Rule::new("A", "a(b|c)d"), Rule::new("B", "x")];
        let compiled = compile(&rules, None).unwrap();
        let caps = compiled.regex.captures("x").unwrap();
        assert!(caps.name("r0").is_none());
        assert_eq!(caps.name("r1").unwrap().as_str(), "x");
    }

    #[test]
    fn test_empty_ruleset_is_rejected() {
        let err = compile(&[], Some("inner")).unwrap_err();
        assert_eq!(
            err,
            TokenizeError::EmptyRuleset {
                ruleset: Some("inner".to_string())
            }
        );
    }

    #[test]
    fn test_rule_without_patterns_is_rejected() {
        let rules = [Rule {
            name: Some("A".to_string()),
            patterns: vec![],
            delegate: None,
        }];
        let err = compile(&rules, None).unwrap_err();
        assert!(matches!(err, TokenizeError::InvalidPattern { .. }));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let rules = [Rule::new("A", "(unclosed")];
        let err = compile(&rules, None).unwrap_err();
        assert!(matches!(err, TokenizeError::InvalidPattern { ruleset: None, .. }));
    }

    #[test]
    fn test_recompilation_is_equivalent() {
        let rules = [Rule::new("A", "a+"), Rule::new("B", "b")];
        let first = compile(&rules, None).unwrap();
        let second = compile(&rules, None).unwrap();
        assert_eq!(first.regex.as_str(), second.regex.as_str());
        assert_eq!(first.slots.len(), second.slots.len());
    }
}
