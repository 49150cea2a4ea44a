//! Hand-written scanner for shorthand statements.
//!
//! The scanner recognizes four kinds of structure inside a statement:
//!
//! | Structure | Shape | Example |
//! |-----------|-------|---------|
//! | pseudo token | `:` or `::`, a word, optional `(param)` | `:hover`, `::before`, `:nthChild(2n)` |
//! | combinator token | `&`, a symbol (`>`, `~`, `+` or a space), a word | `&>span`, `& li` |
//! | media alias | `@` and a word | `@md` |
//! | bracket escape | `[` anything but brackets `]` | `[a=b]` |
//!
//! A word is one or more ASCII letters, digits or underscores. Text inside a
//! bracket escape is never scanned for tokens.

use super::token::{Combinator, ParsedStatement, SelectorToken};

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Index just past the run of word bytes starting at `start`.
fn word_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && is_word_byte(bytes[end]) {
        end += 1;
    }
    end
}

/// A `[...]` fragment found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bracket<'a> {
    content: &'a str,
    /// Index just past the closing `]`.
    end: usize,
}

/// Matches a bracket escape opening at `start`.
///
/// The content must be non-empty and may not contain `[` or `]`.
fn bracket_at(s: &str, start: usize) -> Option<Bracket<'_>> {
    let bytes = s.as_bytes();
    if bytes.get(start) != Some(&b'[') {
        return None;
    }
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'[' => return None,
            b']' if i == start + 1 => return None,
            b']' => {
                return Some(Bracket {
                    content: &s[start + 1..i],
                    end: i + 1,
                })
            }
            _ => i += 1,
        }
    }
    None
}

/// First bracket escape anywhere in `s`.
fn first_bracket(s: &str) -> Option<Bracket<'_>> {
    s.bytes()
        .enumerate()
        .filter(|(_, b)| *b == b'[')
        .find_map(|(i, _)| bracket_at(s, i))
}

/// Lexes a pseudo token at `start` (which must hold `:`).
fn lex_pseudo(s: &str, start: usize) -> Option<(SelectorToken, usize)> {
    let bytes = s.as_bytes();
    let mut i = start + 1;
    if bytes.get(i) == Some(&b':') {
        i += 1;
    }
    let name_end = word_end(bytes, i);
    if name_end == i {
        return None;
    }
    let name = &s[i..name_end];

    if bytes.get(name_end) == Some(&b'(') {
        let mut close = name_end + 1;
        while close < bytes.len() && bytes[close] != b'(' && bytes[close] != b')' {
            close += 1;
        }
        if bytes.get(close) == Some(&b')') {
            let param = &s[name_end + 1..close];
            return Some((SelectorToken::functional(name, param), close + 1));
        }
    }

    Some((SelectorToken::named(name), name_end))
}

/// Lexes a combinator token at `start` (which must hold `&`).
fn lex_combinator(s: &str, start: usize) -> Option<(SelectorToken, usize)> {
    let bytes = s.as_bytes();
    let mut i = start + 1;
    let mut saw_space = false;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        saw_space |= bytes[i] == b' ';
        i += 1;
    }

    let combinator = match bytes.get(i).map(|b| *b as char).and_then(Combinator::from_symbol) {
        Some(c) if c != Combinator::Descendant => {
            i += 1;
            c
        }
        // The whitespace run already contained the space symbol.
        _ if saw_space => Combinator::Descendant,
        _ => return None,
    };

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    let target_end = word_end(bytes, i);
    if target_end == i {
        return None;
    }

    Some((SelectorToken::combinator(combinator, &s[i..target_end]), target_end))
}

/// Lexes a media alias at `start` (which must hold `@`).
fn lex_media(s: &str, start: usize) -> Option<(&str, usize)> {
    let end = word_end(s.as_bytes(), start + 1);
    if end == start + 1 {
        return None;
    }
    Some((&s[start + 1..end], end))
}

/// Parses one statement of an alias prop.
///
/// Selector tokens are collected wherever they appear, in order. The first
/// media alias wins. The raw value is, in order of precedence:
///
/// 1. the contents of the first `[...]` fragment, verbatim;
/// 2. everything after the last `=`;
/// 3. the empty string, if any selector token or media alias was found;
/// 4. the whole statement.
///
/// # Example
///
/// ```rust
/// use proper_style::parse::{parse_statement, SelectorToken};
///
/// let parsed = parse_statement(":hover@md=red");
/// assert_eq!(parsed.selectors, vec![SelectorToken::named("hover")]);
/// assert_eq!(parsed.media.as_deref(), Some("md"));
/// assert_eq!(parsed.value, "red");
/// ```
pub fn parse_statement(statement: &str) -> ParsedStatement {
    let bytes = statement.as_bytes();
    let mut parsed = ParsedStatement::default();
    let mut i = 0;

    while i < bytes.len() {
        let lexed_end = match bytes[i] {
            b'[' => bracket_at(statement, i).map(|b| b.end),
            b':' => lex_pseudo(statement, i).map(|(token, end)| {
                parsed.selectors.push(token);
                end
            }),
            b'&' => lex_combinator(statement, i).map(|(token, end)| {
                parsed.selectors.push(token);
                end
            }),
            b'@' => lex_media(statement, i).map(|(alias, end)| {
                if parsed.media.is_none() {
                    parsed.media = Some(alias.to_string());
                }
                end
            }),
            _ => None,
        };
        i = lexed_end.unwrap_or(i + 1);
    }

    parsed.value = if let Some(bracket) = first_bracket(statement) {
        bracket.content.to_string()
    } else if let Some(pos) = statement.rfind('=') {
        statement[pos + 1..].to_string()
    } else if parsed.has_structure() {
        String::new()
    } else {
        statement.to_string()
    };

    parsed
}

/// Parses one statement of a pseudo prop (a prop keyed by a selector name).
///
/// Selector tokens and the media alias are only recognized as a leading
/// prefix. The remainder, minus one leading `=`, is the mini-list text. When
/// the remainder is a single `[...]` fragment its contents are used verbatim.
///
/// ```rust
/// use proper_style::parse::{parse_scoped_statement, SelectorToken};
///
/// let parsed = parse_scoped_statement("::before@md=content=hi;color=red");
/// assert_eq!(parsed.selectors, vec![SelectorToken::named("before")]);
/// assert_eq!(parsed.media.as_deref(), Some("md"));
/// assert_eq!(parsed.value, "content=hi;color=red");
/// ```
pub fn parse_scoped_statement(statement: &str) -> ParsedStatement {
    let bytes = statement.as_bytes();
    let mut parsed = ParsedStatement::default();
    let mut i = 0;

    while i < bytes.len() {
        let next = match bytes[i] {
            b':' => lex_pseudo(statement, i).map(|(token, end)| {
                parsed.selectors.push(token);
                end
            }),
            b'&' => lex_combinator(statement, i).map(|(token, end)| {
                parsed.selectors.push(token);
                end
            }),
            b'@' if parsed.media.is_none() => lex_media(statement, i).map(|(alias, end)| {
                parsed.media = Some(alias.to_string());
                end
            }),
            _ => None,
        };
        match next {
            Some(end) => i = end,
            None => break,
        }
    }

    let rest = &statement[i..];
    let rest = if parsed.has_structure() {
        rest.strip_prefix('=').unwrap_or(rest)
    } else {
        rest
    };

    parsed.value = match bracket_at(rest, 0) {
        Some(bracket) if bracket.end == rest.len() => bracket.content.to_string(),
        _ => rest.to_string(),
    };

    parsed
}

/// Splits `input` on `separator`, leaving separators inside `[...]` intact.
fn split_outside_brackets(input: &str, separator: u8) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'[' {
            if let Some(bracket) = bracket_at(input, i) {
                i = bracket.end;
                continue;
            }
        }
        if bytes[i] == separator {
            parts.push(&input[start..i]);
            start = i + 1;
        }
        i += 1;
    }
    parts.push(&input[start..]);
    parts
}

/// Splits a prop value into its `|`-separated statements.
pub fn split_statements(input: &str) -> Vec<&str> {
    split_outside_brackets(input, b'|')
}

/// Splits a mini-list (`alias=value;alias=value`) into alias/value pairs.
///
/// Each item is split on its first `=`. Items without one carry no value
/// and are skipped, as are empty items. A value written as a single `[...]`
/// fragment is unwrapped.
pub fn split_mini_list(input: &str) -> Vec<(&str, &str)> {
    split_outside_brackets(input, b';')
        .into_iter()
        .filter_map(|item| {
            let (alias, value) = item.split_once('=')?;
            let value = match bracket_at(value, 0) {
                Some(bracket) if bracket.end == value.len() => bracket.content,
                _ => value,
            };
            Some((alias, value))
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parsing_never_panics(input in "\\PC{0,40}") {
            let _ = parse_statement(&input);
            let _ = parse_scoped_statement(&input);
            let _ = split_mini_list(&input);
        }

        #[test]
        fn plain_text_is_its_own_value(input in "[a-z0-9 .,%#()-]{0,30}") {
            let parsed = parse_statement(&input);
            prop_assert!(!parsed.has_structure());
            prop_assert_eq!(parsed.value, input);
        }

        #[test]
        fn statements_rejoin_to_input(input in "[a-z:=|\\[\\]@]{0,30}") {
            prop_assert_eq!(split_statements(&input).join("|"), input);
        }
    }
}
