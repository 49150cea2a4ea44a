//! Lexical analysis of shorthand prop values.
//!
//! A prop value is a `|`-separated list of statements. Each statement may
//! carry selector tokens, a media alias and a raw value:
//!
//! ```text
//! prop-value   := statement ('|' statement)*
//! statement    := (pseudo-token)* ('@' media-ident)? value-part?
//! pseudo-token := ':' ident ('(' param ')')?  |  '&' combinator-sym ident
//! value-part   := '[' raw-chars ']'  |  '=' raw-chars  |  raw-chars
//! mini-list    := mini-stmt (';' mini-stmt)*
//! mini-stmt    := alias-ident '=' raw-chars
//! ```
//!
//! Parsing never fails. Text that does not match any structure is treated as
//! a literal value.

mod scanner;
mod token;

pub use scanner::{parse_scoped_statement, parse_statement, split_mini_list, split_statements};
pub use token::{Combinator, ParsedStatement, SelectorToken};
