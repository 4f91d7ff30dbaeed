//! Property-based tests for the tokenizer
//!
//! These pin down the engine's global guarantees: parsing is deterministic,
//! accepted input is reconstructed exactly by concatenating token texts, and
//! rejected input is reported at the exact first unmatched character.

use proptest::prelude::*;
use relex::relex::engine::Tokenizer;
use relex::relex::error::TokenizeError;
use relex::relex::registry::TypeRegistry;
use relex::relex::rules::{Rule, StaticRules};
use relex::relex::token::Token;

/// Words, numbers, and whitespace - accepts everything the strategies below
/// generate.
fn word_tokenizer() -> Tokenizer<StaticRules> {
    let rules = StaticRules::new()
        .rule(Rule::new("T_WORD", "[a-z]+"))
        .rule(Rule::new("T_NUMBER", "[0-9]+"))
        .rule(Rule::any("[ \\n]+"));
    let registry = TypeRegistry::new().with("T_WORD", 307).with("T_NUMBER", 305);
    Tokenizer::with_registry(rules, registry)
}

/// Digits-only grammar used for the rejection property.
fn digit_tokenizer() -> Tokenizer<StaticRules> {
    Tokenizer::new(StaticRules::new().rule(Rule::new("T_NUMBER", "[0-9]+")))
}

proptest! {
    #[test]
    fn test_concatenated_tokens_reconstruct_input(input in "[a-z0-9 \n]{0,64}") {
        let tokens = word_tokenizer().parse(&input).unwrap();
        let rebuilt: String = tokens.iter().map(Token::text).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_parse_is_deterministic(input in "[a-z0-9 \n]{0,64}") {
        let tokenizer = word_tokenizer();
        let first = tokenizer.parse(&input).unwrap();
        let second = tokenizer.parse(&input).unwrap();
        prop_assert_eq!(first, second);

        let fresh = word_tokenizer().parse(&input).unwrap();
        let again = word_tokenizer().parse(&input).unwrap();
        prop_assert_eq!(fresh, again);
    }

    #[test]
    fn test_unmatched_input_reports_exact_column(
        head in "[0-9]{0,8}",
        tail in "[!@#][!@#a-z0-9]{0,5}",
    ) {
        let input = format!("{}{}", head, tail);
        let err = digit_tokenizer().parse(&input).unwrap_err();
        match err {
            TokenizeError::UnmatchedInput { line, column, .. } => {
                prop_assert_eq!(line, 1);
                prop_assert_eq!(column, head.chars().count() + 1);
            }
            other => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn test_coded_tokens_carry_registered_names(input in "[a-z0-9 \n]{0,64}") {
        let tokens = word_tokenizer().parse(&input).unwrap();
        for token in &tokens {
            match token {
                Token::Coded { type_name, .. } => {
                    prop_assert!(type_name == "T_WORD" || type_name == "T_NUMBER");
                }
                Token::Fragment(text) => {
                    prop_assert!(text.chars().all(|c| c == ' ' || c == '\n'));
                }
            }
        }
    }
}
