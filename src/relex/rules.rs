//! Rule model and rule providers
//!
//! A rule is one named lexical alternative: a type name, one or more regex
//! patterns (any of them matching counts as the rule firing), and an optional
//! delegate. Declaration order is significant - the first rule whose pattern
//! matches at the current position wins, which is the tie-break for
//! overlapping patterns.
//!
//! Rules reach the engine through the [`RuleProvider`] capability. Providers
//! return the ordered rule list for a rule-set identifier (`None` meaning the
//! root set) and an alias map rewriting raw type names to canonical ones.
//! [`StaticRules`] is the in-code provider; `loader::RuleBook` loads rule
//! definitions from YAML or JSON.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Sentinel type assigned to rules declared with a positional (unnamed) key.
pub const ANY_TYPE: &str = "__ANY__";

/// Decides the final type name of a matched slice, bypassing recursion.
pub trait Checker {
    fn check(&self, text: &str) -> String;
}

impl<F> Checker for F
where
    F: Fn(&str) -> String,
{
    fn check(&self, text: &str) -> String {
        self(text)
    }
}

/// Where a rule hands its matched text: a nested rule set or a checker.
#[derive(Clone)]
pub enum Delegate {
    /// Re-tokenize the match with the named rule set and splice the result
    Ruleset(String),
    /// Ask the checker for the final type name and emit a single token
    Checker(Arc<dyn Checker + Send + Sync>),
}

impl fmt::Debug for Delegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delegate::Ruleset(id) => f.debug_tuple("Ruleset").field(id).finish(),
            Delegate::Checker(_) => f.write_str("Checker(..)"),
        }
    }
}

/// One lexical alternative in a rule set
#[derive(Debug, Clone)]
pub struct Rule {
    /// Type name; `None` models a positional key and compiles to [`ANY_TYPE`]
    pub name: Option<String>,
    /// Alternative patterns, tried as one alternation slot each
    pub patterns: Vec<String>,
    pub delegate: Option<Delegate>,
}

impl Rule {
    /// A named rule with a single pattern.
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            patterns: vec![pattern.into()],
            delegate: None,
        }
    }

    /// A positional rule; its matches resolve to the [`ANY_TYPE`] sentinel.
    pub fn any(pattern: impl Into<String>) -> Self {
        Self {
            name: None,
            patterns: vec![pattern.into()],
            delegate: None,
        }
    }

    /// Add an alternative pattern to this rule.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Delegate matches to a nested rule set.
    pub fn delegate_to(mut self, ruleset: impl Into<String>) -> Self {
        self.delegate = Some(Delegate::Ruleset(ruleset.into()));
        self
    }

    /// Delegate matches to a checker.
    pub fn checked_by(mut self, checker: impl Checker + Send + Sync + 'static) -> Self {
        self.delegate = Some(Delegate::Checker(Arc::new(checker)));
        self
    }
}

/// Supplies ordered rules per rule-set identifier, plus the alias map.
pub trait RuleProvider {
    /// Ordered rules for `ruleset`; `None` selects the root set. An unknown
    /// identifier returns an empty list, which compilation rejects.
    fn patterns(&self, ruleset: Option<&str>) -> Vec<Rule>;

    /// Raw type name -> canonical type name rewrites, applied per token.
    fn map(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

/// Ordered, in-code rule provider
#[derive(Debug, Clone, Default)]
pub struct StaticRules {
    root: Vec<Rule>,
    rulesets: HashMap<String, Vec<Rule>>,
    map: HashMap<String, String>,
}

impl StaticRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to the root set.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.root.push(rule);
        self
    }

    /// Define a named nested rule set.
    pub fn ruleset(mut self, id: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.rulesets.insert(id.into(), rules);
        self
    }

    /// Add an alias rewriting `from` to `to` in resolved type names.
    pub fn alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.map.insert(from.into(), to.into());
        self
    }
}

impl RuleProvider for StaticRules {
    fn patterns(&self, ruleset: Option<&str>) -> Vec<Rule> {
        match ruleset {
            None => self.root.clone(),
            Some(id) => self.rulesets.get(id).cloned().unwrap_or_default(),
        }
    }

    fn map(&self) -> HashMap<String, String> {
        self.map.clone()
    }
}
