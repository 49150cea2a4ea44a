//! # Proper Style - Shorthand Style Props to Declaration Objects
//!
//! `proper-style` compiles short style props such as `p="4|@md=8"` or
//! `hover="color=red"` into nested declaration objects, the shape accepted by
//! CSS-in-JS style libraries:
//!
//! ```json
//! {
//!   "padding": "1rem",
//!   "@media (min-width: 768px)": { "padding": "2rem" },
//!   "&:hover": { "color": "red" }
//! }
//! ```
//!
//! ## Shorthand Grammar
//!
//! | Form | Example | Meaning |
//! |------|---------|---------|
//! | plain value | `p="1rem"` | `padding: 1rem` |
//! | symbolic value | `display="hidden"` | `display: none` |
//! | statements | `color="red\|:hover=blue"` | base value plus hover value |
//! | selector token | `:hover`, `::before`, `:nthChild(2)`, `&>li` | scopes the statement |
//! | media alias | `@md=block` | wraps in `@media (min-width: 768px)` |
//! | bracket escape | `content=[a=b]` | the raw value `a=b`, never re-parsed |
//! | selector prop | `hover="color=red;bg=blue"` | several aliases inside one scope |
//! | preset | `flexRow="between,center"` | positional sub-values |
//!
//! ## Architecture
//!
//! - [`parse`]: scans statements into selector tokens, a media alias and a raw value
//! - [`registry`]: alias table mapping short names to declaration fragments
//! - [`selector`]: selector names and the nesting of fragments into scopes
//! - [`media`]: media alias table
//! - [`declaration`]: the output object and its deep merge
//! - [`config`]: the tables bundled together, extendable from YAML
//! - [`resolve`]: walks a prop mapping and produces the final object
//!
//! ## Quick Start
//!
//! ```rust
//! use proper_style::{resolve, Props};
//!
//! let props = Props::new()
//!     .with("display", "hidden|@md=flex")
//!     .with("flexRow", "between,center")
//!     .with("onClick", "handler");
//!
//! let resolution = resolve(&props);
//! let json = resolution.declarations.to_json();
//! assert!(json.contains("space-between"));
//! assert!(resolution.is_clean());
//! ```
//!
//! ## Errors
//!
//! Resolution never fails. Unknown props are ignored, unknown selector tokens
//! are skipped, and empty or unusable values drop the prop. Anything dropped
//! for a reason worth knowing is reported as a [`Diagnostic`] and logged via
//! `tracing`. Only loading configuration files returns errors
//! ([`ConfigError`]).
//!
//! ## Feature Flags
//!
//! - `cli`: builds the `proper` command-line tool

pub mod config;
pub mod declaration;
pub mod media;
pub mod parse;
pub mod registry;
pub mod resolve;
pub mod selector;

pub use config::{default_config, ConfigError, StyleConfig};
pub use declaration::{Declarations, Value};
pub use resolve::{resolve, resolve_with, Diagnostic, PropValue, Props, Resolution, Resolver};
