//! Selector table and nesting.
//!
//! A [`SelectorTable`] maps a selector name, as written in a shorthand
//! (`hover`, `nthChild`, `before`), to the [`SelectorKind`] that produces its
//! scope key (`&:hover`, `&:nth-child(2)`, `&::before`).
//!
//! Two built-in tables exist. [`SelectorTable::builtin_tokens`] is used for
//! tokens found inside statements, where combinators carry their own symbol.
//! [`SelectorTable::builtin_props`] is used for props keyed by a selector name
//! and adds named combinators (`directChild`, `descendant`, ...).
//!
//! | Kind | Example name | Key |
//! |------|--------------|-----|
//! | pseudo class | `focusWithin` | `&:focus-within` |
//! | pseudo element | `firstLine` | `&::first-line` |
//! | functional | `not` + `.a` | `&:not(.a)` |
//! | combinator | `directChild` + `li` | `& > li` |

mod nesting;

use indexmap::IndexMap;

use crate::parse::Combinator;

pub use nesting::{nest, token_key};

/// How a selector name becomes a scope key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorKind {
    /// `&:<css>`
    PseudoClass(String),
    /// `&::<css>`
    PseudoElement(String),
    /// `&:<css>(<param>)`; requires a parameter.
    Functional(String),
    /// `& <symbol> <param>`; requires a parameter.
    Combinator(Combinator),
}

impl SelectorKind {
    /// Builds the scope key, or `None` when a required parameter is missing.
    ///
    /// Kinds that take no parameter ignore one if given.
    pub fn key(&self, param: Option<&str>) -> Option<String> {
        let param = param.filter(|p| !p.is_empty());
        match self {
            SelectorKind::PseudoClass(css) => Some(format!("&:{}", css)),
            SelectorKind::PseudoElement(css) => Some(format!("&::{}", css)),
            SelectorKind::Functional(css) => param.map(|p| format!("&:{}({})", css, p)),
            SelectorKind::Combinator(combinator) => param.map(|p| combinator.selector(p)),
        }
    }
}

const PSEUDO_ELEMENTS: &[(&str, &str)] = &[
    ("before", "before"),
    ("after", "after"),
    ("firstLetter", "first-letter"),
    ("firstLine", "first-line"),
    ("selection", "selection"),
    ("marker", "marker"),
    ("placeholder", "placeholder"),
    ("backdrop", "backdrop"),
];

const PSEUDO_CLASSES: &[(&str, &str)] = &[
    ("hover", "hover"),
    ("focus", "focus"),
    ("active", "active"),
    ("lastChild", "last-child"),
    ("firstChild", "first-child"),
    ("lastOfType", "last-of-type"),
    ("firstOfType", "first-of-type"),
    ("empty", "empty"),
    ("checked", "checked"),
    ("disabled", "disabled"),
    ("enabled", "enabled"),
    ("visited", "visited"),
    ("link", "link"),
    ("target", "target"),
    ("focusWithin", "focus-within"),
    ("focusVisible", "focus-visible"),
    ("onlyChild", "only-child"),
    ("onlyOfType", "only-of-type"),
    ("readOnly", "read-only"),
    ("readWrite", "read-write"),
    ("placeholderShown", "placeholder-shown"),
];

const FUNCTIONAL: &[(&str, &str)] = &[
    ("nthChild", "nth-child"),
    ("nthOfType", "nth-of-type"),
    ("not", "not"),
];

const NAMED_COMBINATORS: &[(&str, Combinator)] = &[
    ("descendant", Combinator::Descendant),
    ("directChild", Combinator::Child),
    ("adjacentSibling", Combinator::AdjacentSibling),
    ("generalSibling", Combinator::GeneralSibling),
];

/// Selector name → [`SelectorKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorTable {
    entries: IndexMap<String, SelectorKind>,
}

impl SelectorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Pseudo elements, pseudo classes and functional pseudo classes.
    pub fn builtin_tokens() -> Self {
        let mut table = Self::new();
        for (name, css) in PSEUDO_ELEMENTS {
            table.insert(*name, SelectorKind::PseudoElement(css.to_string()));
        }
        for (name, css) in PSEUDO_CLASSES {
            table.insert(*name, SelectorKind::PseudoClass(css.to_string()));
        }
        for (name, css) in FUNCTIONAL {
            table.insert(*name, SelectorKind::Functional(css.to_string()));
        }
        table
    }

    /// [`SelectorTable::builtin_tokens`] plus named combinators.
    pub fn builtin_props() -> Self {
        let mut table = Self::builtin_tokens();
        for (name, combinator) in NAMED_COMBINATORS {
            table.insert(*name, SelectorKind::Combinator(*combinator));
        }
        table
    }

    /// Registers a selector, replacing any previous definition.
    pub fn insert(&mut self, name: impl Into<String>, kind: SelectorKind) {
        self.entries.insert(name.into(), kind);
    }

    /// Builder form of [`SelectorTable::insert`].
    pub fn with(mut self, name: impl Into<String>, kind: SelectorKind) -> Self {
        self.insert(name, kind);
        self
    }

    pub fn get(&self, name: &str) -> Option<&SelectorKind> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All selector names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scope key for `name` with an optional parameter.
    ///
    /// Returns `None` for unknown names and for parameterized kinds given no
    /// parameter.
    pub fn selector_key(&self, name: &str, param: Option<&str>) -> Option<String> {
        self.get(name).and_then(|kind| kind.key(param))
    }
}
