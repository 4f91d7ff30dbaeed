//! The tokenization engine
//!
//! [`Tokenizer`] drives repeated anchored matching of a compiled rule set
//! over the input. Each iteration matches at the current scan position,
//! resolves the winning rule from the first capture slot that fired, applies
//! the provider's alias map, and then either emits a token, asks the rule's
//! checker for the final type, or recursively tokenizes the matched text with
//! the rule's nested rule set - splicing the sub-tokens into the output in
//! place, so delegation itself never becomes a token.
//!
//! Compiled rule sets are cached per identifier for the engine's lifetime;
//! re-entering the same sub-grammar during recursion reuses the cached
//! matcher. The engine is single-threaded; share it across threads by giving
//! each thread its own instance.
//!
//! Any input the rules cannot match aborts the whole parse with
//! [`TokenizeError::UnmatchedInput`] - trailing unrecognized content is never
//! silently dropped, and no partial token list is returned.

use crate::relex::compile::{compile, CompiledRuleset};
use crate::relex::error::{preview, TokenizeError};
use crate::relex::position::coordinates;
use crate::relex::registry::TypeRegistry;
use crate::relex::rules::{Delegate, RuleProvider};
use crate::relex::token::Token;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Rule-driven tokenizer over a rule provider
pub struct Tokenizer<R: RuleProvider> {
    rules: R,
    map: HashMap<String, String>,
    registry: TypeRegistry,
    cache: RefCell<HashMap<Option<String>, Rc<CompiledRuleset>>>,
}

impl<R: RuleProvider> Tokenizer<R> {
    /// An engine with an empty type registry; every token is a fragment.
    pub fn new(rules: R) -> Self {
        Self::with_registry(rules, TypeRegistry::new())
    }

    /// An engine emitting coded tokens for type names present in `registry`.
    pub fn with_registry(rules: R, registry: TypeRegistry) -> Self {
        let map = rules.map();
        Self {
            rules,
            map,
            registry,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Tokenize `content` into a flat, source-ordered token list.
    pub fn parse(&self, content: &str) -> Result<Vec<Token>, TokenizeError> {
        self.tokenize(content, 0, None)
    }

    /// Fetch the compiled matcher for `ruleset`, compiling it on first use.
    fn compiled(&self, ruleset: Option<&str>) -> Result<Rc<CompiledRuleset>, TokenizeError> {
        let key = ruleset.map(String::from);
        if let Some(hit) = self.cache.borrow().get(&key) {
            return Ok(Rc::clone(hit));
        }
        let rules = self.rules.patterns(ruleset);
        let compiled = Rc::new(compile(&rules, ruleset)?);
        self.cache.borrow_mut().insert(key, Rc::clone(&compiled));
        Ok(compiled)
    }

    /// One tokenization pass over `input` at one recursion depth.
    ///
    /// `line_offset` is the number of newlines already consumed in the outer
    /// input, so delegated sub-tokens report lines relative to the whole
    /// source. Columns are relative to `input`.
    fn tokenize(
        &self,
        input: &str,
        line_offset: usize,
        ruleset: Option<&str>,
    ) -> Result<Vec<Token>, TokenizeError> {
        let compiled = self.compiled(ruleset)?;
        let mut result = Vec::new();
        let mut consumed = 0;

        while consumed < input.len() {
            let Some(caps) = compiled.regex.captures(&input[consumed..]) else {
                break;
            };
            let matched = caps.get(0).map_or("", |m| m.as_str());

            // First slot (declaration order) that captured non-empty text.
            // A zero-length match has no such slot and cannot make progress;
            // it falls through to the unmatched-tail report below.
            let winner = compiled.slots.iter().find(|slot| {
                caps.name(&slot.group)
                    .map_or(false, |m| !m.as_str().is_empty())
            });
            let Some(slot) = winner else {
                break;
            };

            let (local_line, column) = coordinates(input, consumed);
            let line = local_line + line_offset;

            let raw = slot.type_name.as_str();
            let type_name = self
                .map
                .get(raw)
                .cloned()
                .unwrap_or_else(|| raw.to_string());

            match &slot.delegate {
                Some(Delegate::Checker(checker)) => {
                    let resolved = checker.check(matched);
                    result.push(self.emit(resolved, matched, line, column));
                }
                Some(Delegate::Ruleset(sub)) => {
                    // line - 1 is the newline count consumed up to the match
                    let mut inner = self.tokenize(matched, line - 1, Some(sub))?;
                    result.append(&mut inner);
                }
                None => result.push(self.emit(type_name, matched, line, column)),
            }

            consumed += matched.len();
        }

        if consumed < input.len() {
            let (local_line, column) = coordinates(input, consumed);
            return Err(TokenizeError::UnmatchedInput {
                line: local_line + line_offset,
                column,
                preview: preview(&input[consumed..]),
            });
        }

        Ok(result)
    }

    fn emit(&self, type_name: String, text: &str, line: usize, column: usize) -> Token {
        match self.registry.lookup(&type_name) {
            Some(code) => Token::Coded {
                code,
                text: text.to_string(),
                line,
                column,
                type_name,
            },
            None => Token::Fragment(text.to_string()),
        }
    }
}
