// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests verify the lexing and conversion laws over arbitrary inputs:
//! quoting round-trips, numeric conversions, last-write-wins, and parse
//! idempotence.

use proptest::prelude::*;
use specfile::domain::{ScopedKey, Token};
use specfile::parser::lexer::tokenize;
use specfile::store::ConfigStore;

// Integer conversion round-trips for decimal text
proptest! {
    #[test]
    fn test_i64_decimal_roundtrip(n in prop::num::i64::ANY) {
        let token = Token::from(n.to_string());
        prop_assert_eq!(token.as_i64("::n").unwrap(), n);
    }
}

// Integer conversion round-trips for hex text
proptest! {
    #[test]
    fn test_u32_hex_roundtrip(n in prop::num::u32::ANY) {
        let token = Token::from(format!("0x{:X}", n));
        prop_assert_eq!(token.as_u32("::n").unwrap(), n);
    }
}

// Float conversion round-trips
proptest! {
    #[test]
    fn test_f64_roundtrip(n in prop::num::f64::NORMAL) {
        let token = Token::from(n.to_string());
        let parsed = token.as_f64("::f").unwrap();
        prop_assert!((parsed - n).abs() < 1e-10 * n.abs().max(1.0));
    }
}

// Strings starting with a letter never parse as integers
proptest! {
    #[test]
    fn test_integer_parsing_non_numeric(s in "[a-zA-Z][a-zA-Z ]*") {
        let token = Token::from(s);
        prop_assert!(token.as_i64("::n").is_err());
    }
}

// A double-quoted token preserves spaces and commas exactly
proptest! {
    #[test]
    fn test_double_quoted_token_preserves_content(s in "[a-z0-9 ,]*") {
        let tokens = tokenize(&format!("\"{}\"", s));
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].as_str(), s.as_str());
    }
}

// Bare words separated by commas tokenize back to themselves
proptest! {
    #[test]
    fn test_comma_joined_words_roundtrip(words in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let joined = words.join(", ");
        let tokens: Vec<String> = tokenize(&joined).into_iter().map(String::from).collect();
        prop_assert_eq!(tokens, words);
    }
}

// The last declaration of a key always wins, whatever the earlier values were
proptest! {
    #[test]
    fn test_last_write_wins(first in "[a-z]{1,8}", second in "[a-z]{1,8}") {
        let content = format!("k = {}\nk = {}\n", first, second);
        let store = ConfigStore::parse(&content);
        let tokens = store.tokens(&ScopedKey::from("::k")).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].as_str(), second.as_str());
    }
}

// Parsing the same text twice yields the same entry set
proptest! {
    #[test]
    fn test_parse_idempotence(
        keys in prop::collection::vec("[a-z]{1,6}", 1..8),
        section in "[a-z]{1,6}",
    ) {
        let mut content = String::new();
        for (i, key) in keys.iter().enumerate() {
            content.push_str(&format!("{} = {}\n", key, i));
        }
        content.push_str(&format!("[{}]\nx = 1\n", section));

        let collect = |store: &ConfigStore| {
            let mut pairs: Vec<(String, Vec<String>)> = store
                .dump()
                .map(|(k, tokens)| {
                    (
                        k.as_str().to_string(),
                        tokens.iter().map(|t| t.as_string()).collect(),
                    )
                })
                .collect();
            pairs.sort();
            pairs
        };

        let store1 = ConfigStore::parse(&content);
        let store2 = ConfigStore::parse(&content);
        prop_assert_eq!(collect(&store1), collect(&store2));
    }
}

// Arbitrary single-line input never panics the lexer
proptest! {
    #[test]
    fn test_tokenize_never_panics(s in "\\PC*") {
        let _ = tokenize(&s);
    }
}

// Arbitrary multi-line input never panics the parser
proptest! {
    #[test]
    fn test_parse_never_panics(s in "(\\PC|\n|\t)*") {
        let _ = ConfigStore::parse(&s);
    }
}

// Every token an unquoted value line produces is free of spaces and commas
proptest! {
    #[test]
    fn test_unquoted_tokens_contain_no_separators(s in "[a-z0-9 ,]*") {
        for token in tokenize(&s) {
            prop_assert!(!token.as_str().contains(' '));
            prop_assert!(!token.as_str().contains(','));
        }
    }
}
