//! Declarative rule definitions loaded from YAML or JSON
//!
//! A [`RuleBook`] is the data form of a rule provider: the root rule list,
//! named nested rule sets, and the alias map, all declarative. Rule order in
//! the definition file is the matching priority.
//!
//! # Example
//!
//! ```rust
//! use relex::relex::engine::Tokenizer;
//! use relex::relex::loader::RuleBook;
//!
//! let book = RuleBook::from_yaml(
//!     r#"
//! root:
//!   - type: T_NUMBER
//!     patterns: '[0-9]+'
//!   - patterns: '\s+'
//! "#,
//! )
//! .unwrap();
//! let tokens = Tokenizer::new(book).parse("1 2").unwrap();
//! ```
//!
//! Checker delegates are code, not data; rule sets that need them are built
//! with [`StaticRules`](crate::relex::rules::StaticRules) or a custom
//! [`RuleProvider`](crate::relex::rules::RuleProvider) instead.

use crate::relex::rules::{Delegate, Rule, RuleProvider};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Error loading rule definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleBookError {
    /// The source is not a valid rule definition document
    Parse(String),
}

impl fmt::Display for RuleBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleBookError::Parse(msg) => write!(f, "Invalid rule definitions: {}", msg),
        }
    }
}

impl std::error::Error for RuleBookError {}

/// A pattern field accepting either one pattern or a list of alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Patterns {
    One(String),
    Many(Vec<String>),
}

/// One declarative rule: optional type name, pattern(s), optional delegation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDef {
    /// Type name; omitted for positional rules
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(alias = "pattern")]
    pub patterns: Patterns,
    /// Nested rule-set identifier to re-tokenize matches with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegate: Option<String>,
}

impl RuleDef {
    fn to_rule(&self) -> Rule {
        let patterns = match &self.patterns {
            Patterns::One(p) => vec![p.clone()],
            Patterns::Many(ps) => ps.clone(),
        };
        Rule {
            name: self.type_name.clone(),
            patterns,
            delegate: self.delegate.clone().map(Delegate::Ruleset),
        }
    }
}

/// Declarative rule provider deserialized from YAML or JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBook {
    /// Raw -> canonical type name rewrites
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub map: HashMap<String, String>,
    /// The root rule set, in matching priority order
    pub root: Vec<RuleDef>,
    /// Named nested rule sets
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub rulesets: HashMap<String, Vec<RuleDef>>,
}

impl RuleBook {
    pub fn from_yaml(source: &str) -> Result<Self, RuleBookError> {
        serde_yaml::from_str(source).map_err(|e| RuleBookError::Parse(e.to_string()))
    }

    pub fn from_json(source: &str) -> Result<Self, RuleBookError> {
        serde_json::from_str(source).map_err(|e| RuleBookError::Parse(e.to_string()))
    }
}

impl RuleProvider for RuleBook {
    fn patterns(&self, ruleset: Option<&str>) -> Vec<Rule> {
        let defs = match ruleset {
            None => Some(&self.root),
            Some(id) => self.rulesets.get(id),
        };
        defs.map(|defs| defs.iter().map(RuleDef::to_rule).collect())
            .unwrap_or_default()
    }

    fn map(&self) -> HashMap<String, String> {
        self.map.clone()
    }
}
