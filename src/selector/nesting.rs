use crate::declaration::Declarations;
use crate::parse::SelectorToken;

use super::SelectorTable;

/// Scope key for a single token, or `None` if the table cannot resolve it.
///
/// Combinator tokens carry their own symbol and always resolve.
pub fn token_key(token: &SelectorToken, table: &SelectorTable) -> Option<String> {
    match token {
        SelectorToken::Named(name) => table.selector_key(name, None),
        SelectorToken::Functional { name, param } => table.selector_key(name, Some(param)),
        SelectorToken::Combinator { combinator, target } => Some(combinator.selector(target)),
    }
}

/// Wraps `rule` in one scope per token.
///
/// The last token wraps innermost and the first outermost, so
/// `[hover, before]` yields `{"&:hover": {"&::before": rule}}`. Tokens the
/// table cannot resolve are skipped and reported to `on_unknown`. With no
/// tokens the rule is returned unchanged.
///
/// ```rust
/// use proper_style::declarations;
/// use proper_style::parse::SelectorToken;
/// use proper_style::selector::{nest, SelectorTable};
///
/// let table = SelectorTable::builtin_tokens();
/// let tokens = [SelectorToken::named("hover"), SelectorToken::named("before")];
/// let nested = nest(declarations! { "color" => "red" }, &tokens, &table, |_| {});
///
/// assert_eq!(
///     nested.to_json_compact(),
///     r#"{"&:hover":{"&::before":{"color":"red"}}}"#
/// );
/// ```
pub fn nest<F>(
    rule: Declarations,
    tokens: &[SelectorToken],
    table: &SelectorTable,
    mut on_unknown: F,
) -> Declarations
where
    F: FnMut(&SelectorToken),
{
    tokens
        .iter()
        .rev()
        .fold(rule, |inner, token| match token_key(token, table) {
            Some(key) => inner.wrap(key),
            None => {
                on_unknown(token);
                inner
            }
        })
}
