//! Non-fatal problems found while resolving props.

/// A problem that caused part of a prop to be dropped.
///
/// Resolution never fails; these are reported alongside the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A style prop was given no content.
    EmptyValue { prop: String },
    /// A style prop was given a value of a shape it cannot use.
    UnsupportedValue { prop: String, kind: String },
    /// A statement referenced a media alias with no query.
    UnknownMedia { prop: String, alias: String },
    /// A parameterized selector prop was given no parameter.
    MissingParameter { prop: String },
    /// A selector token was skipped. Strict mode only.
    UnknownSelector { prop: String, token: String },
    /// A mini-list item named an unknown alias. Strict mode only.
    UnknownAlias { prop: String, alias: String },
}

impl Diagnostic {
    /// The prop the diagnostic was raised for.
    pub fn prop(&self) -> &str {
        match self {
            Diagnostic::EmptyValue { prop }
            | Diagnostic::UnsupportedValue { prop, .. }
            | Diagnostic::UnknownMedia { prop, .. }
            | Diagnostic::MissingParameter { prop }
            | Diagnostic::UnknownSelector { prop, .. }
            | Diagnostic::UnknownAlias { prop, .. } => prop,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::EmptyValue { prop } => write!(f, "the prop {} has no content", prop),
            Diagnostic::UnsupportedValue { prop, kind } => {
                write!(f, "the prop {} cannot take a {} value", prop, kind)
            }
            Diagnostic::UnknownMedia { prop, alias } => {
                write!(f, "the prop {} uses unknown media alias '@{}'", prop, alias)
            }
            Diagnostic::MissingParameter { prop } => {
                write!(f, "the prop {} needs a [parameter, value] pair", prop)
            }
            Diagnostic::UnknownSelector { prop, token } => {
                write!(f, "the prop {} uses unknown selector '{}'", prop, token)
            }
            Diagnostic::UnknownAlias { prop, alias } => {
                write!(f, "the prop {} uses unknown alias '{}'", prop, alias)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_display() {
        let d = Diagnostic::EmptyValue { prop: "p".into() };
        assert_eq!(d.to_string(), "the prop p has no content");
        assert_eq!(d.prop(), "p");
    }

    #[test]
    fn test_unknown_media_display() {
        let d = Diagnostic::UnknownMedia {
            prop: "display".into(),
            alias: "tablet".into(),
        };
        assert!(d.to_string().contains("@tablet"));
    }
}
