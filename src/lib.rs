//! # relex
//!
//! A rule-driven, regex-based tokenizer.
//!
//! A rule set is an ordered list of named patterns. relex compiles a rule set
//! into a single anchored alternation, matches it repeatedly over the input,
//! and resolves each match's type from the first capture slot that fired.
//! A rule may delegate its matched text to a nested rule set (the match is
//! re-tokenized and the sub-tokens spliced in place) or to a checker (a
//! callback that decides the final type from the matched text).
//!
//! Rule sets can be built in code with [StaticRules](relex::rules::StaticRules)
//! or loaded from YAML/JSON with [RuleBook](relex::loader::RuleBook). See the
//! [engine](relex::engine) module for the tokenization loop itself.

pub mod relex;
