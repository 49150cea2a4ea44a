//! Token types produced by the statement scanner.

use std::fmt;

/// A structural combinator joining the current element to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `& > target`
    Child,
    /// `& ~ target`
    GeneralSibling,
    /// `& + target`
    AdjacentSibling,
    /// `& target`
    Descendant,
}

impl Combinator {
    /// Maps a combinator symbol to its variant.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '>' => Some(Combinator::Child),
            '~' => Some(Combinator::GeneralSibling),
            '+' => Some(Combinator::AdjacentSibling),
            ' ' => Some(Combinator::Descendant),
            _ => None,
        }
    }

    /// Builds the selector fragment joining `&` to `target`.
    pub fn selector(self, target: &str) -> String {
        match self {
            Combinator::Child => format!("& > {}", target),
            Combinator::GeneralSibling => format!("& ~ {}", target),
            Combinator::AdjacentSibling => format!("& + {}", target),
            Combinator::Descendant => format!("& {}", target),
        }
    }
}

/// One selector-scoping marker found in a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectorToken {
    /// `:hover`, `::before`
    Named(String),
    /// `:nthChild(2)`
    Functional { name: String, param: String },
    /// `&>span`, `& li`
    Combinator {
        combinator: Combinator,
        target: String,
    },
}

impl SelectorToken {
    /// Creates a [`SelectorToken::Named`] token.
    pub fn named(name: impl Into<String>) -> Self {
        SelectorToken::Named(name.into())
    }

    /// Creates a [`SelectorToken::Functional`] token.
    pub fn functional(name: impl Into<String>, param: impl Into<String>) -> Self {
        SelectorToken::Functional {
            name: name.into(),
            param: param.into(),
        }
    }

    /// Creates a [`SelectorToken::Combinator`] token.
    pub fn combinator(combinator: Combinator, target: impl Into<String>) -> Self {
        SelectorToken::Combinator {
            combinator,
            target: target.into(),
        }
    }
}

impl fmt::Display for SelectorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorToken::Named(name) => write!(f, ":{}", name),
            SelectorToken::Functional { name, param } => write!(f, ":{}({})", name, param),
            SelectorToken::Combinator { combinator, target } => {
                write!(f, "{}", combinator.selector(target))
            }
        }
    }
}

/// The structure extracted from one declaration statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStatement {
    /// Selector tokens in order of appearance.
    pub selectors: Vec<SelectorToken>,
    /// Media alias following `@`, if any.
    pub media: Option<String>,
    /// The raw value. Empty is a valid value, distinct from no statement.
    pub value: String,
}

impl ParsedStatement {
    /// Returns `true` if the statement carries selector or media structure.
    pub fn has_structure(&self) -> bool {
        !self.selectors.is_empty() || self.media.is_some()
    }
}
