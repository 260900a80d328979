// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line normalization and classification.
//!
//! Each physical line of a settings file is first normalized (tabs become
//! spaces, CR/LF end the line) and then classified as blank, comment,
//! section header, or content. Classification drives the load pass in the
//! [`store`](crate::store) layer.

use crate::parser::lexer::parse_to_delimiter;

/// The classification of one normalized line.
///
/// Variants are checked in order: blank, comment, section header, content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty after skipping leading spaces; ignored, and terminates an open
    /// script block.
    Blank,
    /// Starts with `#` or `//` after leading spaces; ignored entirely.
    Comment,
    /// `[name]` header; carries the section name parsed up to `]` or end of
    /// line.
    Section(String),
    /// Anything else; carries the line with leading spaces skipped.
    Content(&'a str),
}

/// Normalizes one raw physical line.
///
/// Tabs are replaced by a single space each (a tab is a soft separator, not
/// removable punctuation). The first CR or LF truncates the line, so trailing
/// end-of-line markers vanish. No other character is altered.
///
/// # Examples
///
/// ```
/// use specfile::parser::line::normalize;
///
/// assert_eq!(normalize("a\tb\r\n"), "a b");
/// assert_eq!(normalize("plain"), "plain");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\r' | '\n' => break,
            '\t' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

/// Classifies one normalized line.
///
/// # Examples
///
/// ```
/// use specfile::parser::line::{classify, Line};
///
/// assert_eq!(classify("   "), Line::Blank);
/// assert_eq!(classify("# note"), Line::Comment);
/// assert_eq!(classify("// note"), Line::Comment);
/// assert_eq!(classify("[alpha]"), Line::Section("alpha".to_string()));
/// assert_eq!(classify("  x = 1"), Line::Content("x = 1"));
/// ```
pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim_start_matches(' ');
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('#') || trimmed.starts_with("//") {
        return Line::Comment;
    }
    if let Some(rest) = trimmed.strip_prefix('[') {
        return Line::Section(parse_to_delimiter(rest, ']'));
    }
    Line::Content(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tabs_become_spaces() {
        assert_eq!(normalize("a\tb\tc"), "a b c");
    }

    #[test]
    fn test_normalize_strips_crlf() {
        assert_eq!(normalize("key = 1\r\n"), "key = 1");
        assert_eq!(normalize("key = 1\n"), "key = 1");
    }

    #[test]
    fn test_normalize_cr_truncates() {
        // An embedded CR ends the line at that point.
        assert_eq!(normalize("before\rafter"), "before");
    }

    #[test]
    fn test_normalize_leaves_other_characters() {
        assert_eq!(normalize("  a = \"b c\"  "), "  a = \"b c\"  ");
    }

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("     "), Line::Blank);
    }

    #[test]
    fn test_classify_comment_hash() {
        assert_eq!(classify("# a comment"), Line::Comment);
        assert_eq!(classify("   # indented"), Line::Comment);
    }

    #[test]
    fn test_classify_comment_slashes() {
        assert_eq!(classify("// a comment"), Line::Comment);
        assert_eq!(classify("  // indented"), Line::Comment);
    }

    #[test]
    fn test_single_slash_is_content() {
        assert_eq!(classify("/ not a comment"), Line::Content("/ not a comment"));
    }

    #[test]
    fn test_classify_section() {
        assert_eq!(classify("[alpha]"), Line::Section("alpha".to_string()));
        assert_eq!(classify("  [bravo]"), Line::Section("bravo".to_string()));
    }

    #[test]
    fn test_classify_section_unclosed() {
        // No closing bracket: the name runs to end of content.
        assert_eq!(classify("[alpha"), Line::Section("alpha".to_string()));
    }

    #[test]
    fn test_classify_section_leading_spaces_inside() {
        assert_eq!(classify("[ alpha ]"), Line::Section("alpha".to_string()));
    }

    #[test]
    fn test_classify_content() {
        assert_eq!(classify("key = value"), Line::Content("key = value"));
        assert_eq!(classify("   key"), Line::Content("key"));
    }
}
