// SPDX-License-Identifier: MIT OR Apache-2.0

//! The token lexer.
//!
//! Two related primitives: `parse_to_delimiter`, used for section names and
//! base key names, and `tokenize`, which splits the value expression after
//! `=` into discrete tokens honoring quoting and comma separation. The lexer
//! is lenient by design: malformed input produces fewer or shorter tokens,
//! never an error.

use crate::domain::token::Token;

/// Copies characters up to (but not including) a space or the delimiter.
///
/// Leading spaces are skipped first; the copied substring preserves case and
/// is not trimmed internally. The delimiter itself is not consumed.
///
/// # Examples
///
/// ```
/// use specfile::parser::lexer::parse_to_delimiter;
///
/// assert_eq!(parse_to_delimiter("  key = 1", '='), "key");
/// assert_eq!(parse_to_delimiter("alpha] trailing", ']'), "alpha");
/// assert_eq!(parse_to_delimiter("bare", '='), "bare");
/// ```
pub fn parse_to_delimiter(input: &str, delimiter: char) -> String {
    input
        .trim_start_matches(' ')
        .chars()
        .take_while(|&c| c != ' ' && c != delimiter)
        .collect()
}

/// Splits a value expression into an ordered list of tokens.
///
/// Rules:
/// - spaces around each token are skipped and are not part of the token;
/// - a token may begin with a single `"` or `'`; that exact quote character
///   ends the token, and spaces and commas inside it are ordinary characters;
/// - an unquoted token ends at the first space or comma;
/// - between tokens, trailing spaces are skipped and a single comma is
///   consumed as a separator;
/// - an unterminated quote runs the token to end of input, without error.
///
/// Tokens are unbounded growable strings; there is no length cap.
///
/// # Examples
///
/// ```
/// use specfile::parser::lexer::tokenize;
///
/// let tokens = tokenize(r#" a, "b c", 'd,e' "#);
/// let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(texts, ["a", "b c", "d,e"]);
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        // Skip leading spaces before the next token.
        while chars.next_if(|&c| c == ' ').is_some() {}

        let Some(&first) = chars.peek() else { break };

        // An opening quote-mark is remembered and skipped.
        let quote = if first == '"' || first == '\'' {
            chars.next();
            Some(first)
        } else {
            None
        };

        let mut text = String::new();
        while let Some(&c) = chars.peek() {
            match quote {
                Some(q) if c == q => {
                    chars.next();
                    break;
                }
                Some(_) => {
                    text.push(c);
                    chars.next();
                }
                None if c == ' ' || c == ',' => break,
                None => {
                    text.push(c);
                    chars.next();
                }
            }
        }
        tokens.push(Token::from(text));

        // Skip trailing spaces, then throw away a single separating comma.
        while chars.next_if(|&c| c == ' ').is_some() {}
        chars.next_if(|&c| c == ',');
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(String::from).collect()
    }

    #[test]
    fn test_parse_to_delimiter_skips_leading_spaces() {
        assert_eq!(parse_to_delimiter("   name]", ']'), "name");
    }

    #[test]
    fn test_parse_to_delimiter_stops_at_space() {
        assert_eq!(parse_to_delimiter("key name = 1", '='), "key");
    }

    #[test]
    fn test_parse_to_delimiter_stops_at_end() {
        assert_eq!(parse_to_delimiter("bare", '='), "bare");
    }

    #[test]
    fn test_parse_to_delimiter_preserves_case() {
        assert_eq!(parse_to_delimiter("MyKey=1", '='), "MyKey");
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("    ").is_empty());
    }

    #[test]
    fn test_tokenize_single_bare_word() {
        assert_eq!(texts("hello"), ["hello"]);
        assert_eq!(texts("  hello  "), ["hello"]);
    }

    #[test]
    fn test_tokenize_comma_separated() {
        assert_eq!(texts("a, b, c"), ["a", "b", "c"]);
        assert_eq!(texts("a,b,c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_space_separated() {
        assert_eq!(texts("a b c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_quoting() {
        // The documented law: a, "b c", 'd,e' -> ["a", "b c", "d,e"]
        assert_eq!(texts(r#"a, "b c", 'd,e'"#), ["a", "b c", "d,e"]);
    }

    #[test]
    fn test_tokenize_double_quotes_admit_commas() {
        assert_eq!(texts(r#""one, two""#), ["one, two"]);
    }

    #[test]
    fn test_tokenize_single_quotes_admit_double_quotes() {
        assert_eq!(texts(r#"'say "hi"'"#), [r#"say "hi""#]);
    }

    #[test]
    fn test_tokenize_unterminated_quote_is_lenient() {
        // The token runs to end of input rather than raising an error.
        assert_eq!(texts(r#""abc"#), ["abc"]);
        assert_eq!(texts("'tail end"), ["tail end"]);
    }

    #[test]
    fn test_tokenize_empty_quoted_token() {
        assert_eq!(texts(r#""""#), [""]);
    }

    #[test]
    fn test_tokenize_adjacent_commas_yield_empty_token() {
        assert_eq!(texts("a,,b"), ["a", "", "b"]);
    }

    #[test]
    fn test_tokenize_trailing_comma() {
        assert_eq!(texts("a, b,"), ["a", "b"]);
    }

    #[test]
    fn test_tokenize_long_token_no_cap() {
        let long = "x".repeat(4096);
        assert_eq!(texts(&long), [long.clone()]);
    }

    #[test]
    fn test_tokenize_mixed_separators() {
        assert_eq!(texts("1 , 2,3 4"), ["1", "2", "3", "4"]);
    }
}
