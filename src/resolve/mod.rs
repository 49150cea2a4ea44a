//! Style resolution: props in, one declaration object out.
//!
//! The resolver walks a prop mapping and picks out two kinds of style prop:
//!
//! - **Alias props** (`p`, `bg`, `display`), whose value is a `|`-separated
//!   list of statements. Each statement may carry selector tokens and a media
//!   alias: `p="1rem|:hover=2rem|@md=3rem"`.
//! - **Selector props** (`hover`, `before`, `nthChild`), whose value is a
//!   `;`-separated mini-list of `alias=value` items applied inside the
//!   selector named by the prop: `hover="color=red;bg=blue"`. Parameterized
//!   selectors take a `[parameter, value]` pair: `nthChild=["2n", "bg=gray100"]`.
//!
//! Every other prop is ignored. All alias props are resolved first, then all
//! selector props, each in iteration order, and every fragment is deep-merged
//! into the result.
//!
//! Resolution never fails. Problems are collected as [`Diagnostic`]s on the
//! [`Resolution`] and logged through `tracing`.
//!
//! # Example
//!
//! ```rust
//! use proper_style::resolve::{resolve, Props};
//!
//! let props = Props::new()
//!     .with("p", "4|@md=8")
//!     .with("hover", "color=red")
//!     .with("onClick", "ignored");
//!
//! let resolution = resolve(&props);
//! assert!(resolution.diagnostics.is_empty());
//! assert_eq!(
//!     resolution.declarations.to_json_compact(),
//!     r#"{"padding":"1rem","@media (min-width: 768px)":{"padding":"2rem"},"&:hover":{"color":"red"}}"#
//! );
//! ```

mod diagnostic;
mod props;

use tracing::{debug, trace, warn};

use crate::config::{default_config, StyleConfig};
use crate::declaration::Declarations;
use crate::parse::{parse_scoped_statement, parse_statement, split_mini_list, split_statements};
use crate::parse::{ParsedStatement, SelectorToken};
use crate::selector::nest;

pub use diagnostic::Diagnostic;
pub use props::{PropValue, Props};

/// The result of resolving a prop mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// The merged declaration object.
    pub declarations: Declarations,
    /// Problems found along the way, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// Returns `true` if no diagnostics were raised.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Drops the diagnostics and returns the declaration object.
    pub fn into_declarations(self) -> Declarations {
        self.declarations
    }
}

/// Resolves props against a [`StyleConfig`].
///
/// Cheap to create; holds only a reference to the configuration.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    config: &'a StyleConfig,
    strict: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a StyleConfig) -> Self {
        Self {
            config,
            strict: false,
        }
    }

    /// In strict mode, skipped selector tokens and unknown mini-list aliases
    /// are reported as diagnostics. The declaration output is unchanged.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns `true` if `name` is consumed by the resolver.
    ///
    /// Props for which this is `false` belong to the element itself.
    pub fn is_style_prop(&self, name: &str) -> bool {
        self.config.aliases.contains(name) || self.config.scoped.contains(name)
    }

    /// Resolves every style prop in `props`.
    pub fn resolve(&self, props: &Props) -> Resolution {
        let mut sink = Sink::default();
        let mut alias_styles = Declarations::new();
        let mut selector_styles = Declarations::new();

        for (name, value) in props.iter() {
            if self.config.aliases.contains(name) {
                if let Some(fragment) = self.alias_prop(name, value, &mut sink) {
                    alias_styles.merge(fragment);
                }
            }
        }
        for (name, value) in props.iter() {
            if self.config.scoped.contains(name) {
                if let Some(fragment) = self.selector_prop(name, value, &mut sink) {
                    selector_styles.merge(fragment);
                }
            }
        }

        alias_styles.merge(selector_styles);
        Resolution {
            declarations: alias_styles,
            diagnostics: sink.diagnostics,
        }
    }

    /// Resolves a single prop. `None` if the prop is not a style prop or
    /// contributes nothing.
    pub fn resolve_prop(&self, name: &str, value: &PropValue) -> Option<Declarations> {
        let mut sink = Sink::default();
        let mut out = Declarations::new();
        let mut recognized = false;

        if self.config.aliases.contains(name) {
            recognized = true;
            if let Some(fragment) = self.alias_prop(name, value, &mut sink) {
                out.merge(fragment);
            }
        }
        if self.config.scoped.contains(name) {
            recognized = true;
            if let Some(fragment) = self.selector_prop(name, value, &mut sink) {
                out.merge(fragment);
            }
        }

        if !recognized || (out.is_empty() && !sink.diagnostics.is_empty()) {
            return None;
        }
        Some(out)
    }

    fn alias_prop(&self, name: &str, value: &PropValue, sink: &mut Sink) -> Option<Declarations> {
        let number;
        let input = match value {
            PropValue::Text(s) if !s.is_empty() => s.as_str(),
            PropValue::Number(n) => {
                number = n.to_string();
                number.as_str()
            }
            PropValue::Text(_) | PropValue::Null => {
                sink.push(Diagnostic::EmptyValue { prop: name.into() });
                return None;
            }
            other => {
                sink.push(Diagnostic::UnsupportedValue {
                    prop: name.into(),
                    kind: other.kind().into(),
                });
                return None;
            }
        };

        let mut out = Declarations::new();
        for statement in split_statements(input) {
            let parsed = parse_statement(statement);
            trace!(prop = name, statement, value = %parsed.value, "alias statement");

            let Some(rule) = self.config.aliases.emit(name, &parsed.value) else {
                continue;
            };
            let rule = self.nest_tokens(name, rule, &parsed.selectors, sink);
            if let Some(rule) = self.apply_media(name, &parsed, rule, sink) {
                out.merge(rule);
            }
        }
        Some(out)
    }

    fn selector_prop(&self, name: &str, value: &PropValue, sink: &mut Sink) -> Option<Declarations> {
        let (param, input) = match value {
            PropValue::Text(s) => (None, s.as_str()),
            PropValue::Pair(param, s) => (Some(param.as_str()), s.as_str()),
            PropValue::Null => (None, ""),
            other => {
                sink.push(Diagnostic::UnsupportedValue {
                    prop: name.into(),
                    kind: other.kind().into(),
                });
                return None;
            }
        };
        if input.is_empty() {
            sink.push(Diagnostic::EmptyValue { prop: name.into() });
            return None;
        }

        let Some(scope) = self.config.scoped.selector_key(name, param) else {
            sink.push(Diagnostic::MissingParameter { prop: name.into() });
            return None;
        };

        let mut out = Declarations::new();
        for statement in split_statements(input) {
            let parsed = parse_scoped_statement(statement);
            trace!(prop = name, statement, items = %parsed.value, "selector statement");

            let mut rule = Declarations::new();
            for (alias, raw) in split_mini_list(&parsed.value) {
                match self.config.aliases.emit(alias, raw) {
                    Some(fragment) => rule.merge(fragment),
                    None => {
                        debug!(prop = name, alias, "unknown alias in mini-list");
                        if self.strict {
                            sink.push(Diagnostic::UnknownAlias {
                                prop: name.into(),
                                alias: alias.into(),
                            });
                        }
                    }
                }
            }

            let rule = self.nest_tokens(name, rule, &parsed.selectors, sink).wrap(scope.as_str());
            if let Some(rule) = self.apply_media(name, &parsed, rule, sink) {
                out.merge(rule);
            }
        }
        Some(out)
    }

    fn nest_tokens(
        &self,
        prop: &str,
        rule: Declarations,
        tokens: &[SelectorToken],
        sink: &mut Sink,
    ) -> Declarations {
        let strict = self.strict;
        nest(rule, tokens, &self.config.selectors, |token| {
            debug!(prop, %token, "skipping unknown selector");
            if strict {
                sink.push(Diagnostic::UnknownSelector {
                    prop: prop.into(),
                    token: token.to_string(),
                });
            }
        })
    }

    fn apply_media(
        &self,
        prop: &str,
        parsed: &ParsedStatement,
        rule: Declarations,
        sink: &mut Sink,
    ) -> Option<Declarations> {
        let Some(alias) = parsed.media.as_deref() else {
            return Some(rule);
        };
        let wrapped = self.config.media.wrap(alias, rule);
        if wrapped.is_none() {
            sink.push(Diagnostic::UnknownMedia {
                prop: prop.into(),
                alias: alias.into(),
            });
        }
        wrapped
    }
}

/// Collects diagnostics, logging each one.
#[derive(Debug, Default)]
struct Sink {
    diagnostics: Vec<Diagnostic>,
}

impl Sink {
    fn push(&mut self, diagnostic: Diagnostic) {
        warn!(prop = diagnostic.prop(), "{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// Resolves `props` against the built-in configuration.
pub fn resolve(props: &Props) -> Resolution {
    Resolver::new(default_config()).resolve(props)
}

/// Resolves `props` against `config`.
pub fn resolve_with(config: &StyleConfig, props: &Props) -> Resolution {
    Resolver::new(config).resolve(props)
}
