//! Emitters turn a resolved alias value into a declaration fragment.

use crate::declaration::Declarations;

use super::units::{FLEX_ALIGN_ITEMS, FLEX_DIRECTION, FLEX_JUSTIFY_CONTENT};

/// The value handed to an [`Emitter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitInput<'a> {
    /// A single value.
    Scalar(&'a str),
    /// Comma-separated sub-values of a preset.
    Positional(Vec<&'a str>),
}

impl<'a> EmitInput<'a> {
    /// The sub-value at `index`, if present and non-empty.
    fn slot(&self, index: usize) -> Option<&'a str> {
        let value = match self {
            EmitInput::Scalar(s) if index == 0 => Some(*s),
            EmitInput::Scalar(_) => None,
            EmitInput::Positional(parts) => parts.get(index).copied(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// The input flattened back to a single value.
    fn joined(&self) -> String {
        match self {
            EmitInput::Scalar(s) => s.to_string(),
            EmitInput::Positional(parts) => parts.join(","),
        }
    }
}

/// How an alias produces its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitter {
    /// Every listed property receives the value.
    Properties(Vec<String>),
    /// The property receives the value wrapped in double quotes, optionally
    /// nested under a selector scope such as `&::before`.
    Quoted {
        property: String,
        scope: Option<String>,
    },
    /// `display: flex` plus positional `justifyContent`, `alignItems` and,
    /// when `direction_slot` is set, `flexDirection`.
    FlexPreset {
        direction: Option<String>,
        direction_slot: bool,
    },
}

impl Emitter {
    /// Emits the declaration fragment for `input`.
    pub fn emit(&self, input: EmitInput<'_>) -> Declarations {
        match self {
            Emitter::Properties(properties) => {
                let value = input.joined();
                properties
                    .iter()
                    .map(|property| (property.clone(), value.clone()))
                    .collect()
            }
            Emitter::Quoted { property, scope } => {
                let mut rule = Declarations::new();
                rule.insert(property.clone(), format!("\"{}\"", input.joined()));
                match scope {
                    Some(scope) => rule.wrap(scope.clone()),
                    None => rule,
                }
            }
            Emitter::FlexPreset {
                direction,
                direction_slot,
            } => {
                let mut rule = Declarations::new();
                rule.insert("display", "flex");
                if let Some(direction) = direction {
                    rule.insert("flexDirection", direction.clone());
                }
                if let Some(v) = input.slot(0) {
                    rule.insert("justifyContent", lookup(FLEX_JUSTIFY_CONTENT, v));
                }
                if let Some(v) = input.slot(1) {
                    rule.insert("alignItems", lookup(FLEX_ALIGN_ITEMS, v));
                }
                if *direction_slot {
                    if let Some(v) = input.slot(2) {
                        rule.insert("flexDirection", lookup(FLEX_DIRECTION, v));
                    }
                }
                rule
            }
        }
    }
}

/// Substitutes a symbolic sub-value, passing unknown ones through.
fn lookup(table: &[(&str, &str)], key: &str) -> String {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.to_string())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations;

    #[test]
    fn test_properties_emitter() {
        let emitter = Emitter::Properties(vec!["width".into(), "height".into()]);
        assert_eq!(
            emitter.emit(EmitInput::Scalar("1rem")),
            declarations! { "width" => "1rem", "height" => "1rem" }
        );
    }

    #[test]
    fn test_quoted_emitter() {
        let emitter = Emitter::Quoted {
            property: "content".into(),
            scope: None,
        };
        assert_eq!(
            emitter.emit(EmitInput::Scalar("")),
            declarations! { "content" => "\"\"" }
        );
    }

    #[test]
    fn test_flex_preset_direction_slot() {
        let emitter = Emitter::FlexPreset {
            direction: None,
            direction_slot: true,
        };
        let input = EmitInput::Positional(vec!["around", "", "colReverse"]);
        assert_eq!(
            emitter.emit(input),
            declarations! {
                "display" => "flex",
                "justifyContent" => "space-around",
                "flexDirection" => "column-reverse",
            }
        );
    }

    #[test]
    fn test_flex_preset_fixed_direction_passthrough() {
        let emitter = Emitter::FlexPreset {
            direction: Some("column".into()),
            direction_slot: false,
        };
        let input = EmitInput::Positional(vec!["safe center", "end", "row"]);
        assert_eq!(
            emitter.emit(input),
            declarations! {
                "display" => "flex",
                "flexDirection" => "column",
                "justifyContent" => "safe center",
                "alignItems" => "end",
            }
        );
    }
}
