//! End-to-end resolution through the public API.

use proper_style::parse::parse_statement;
use proper_style::registry::AliasRegistry;
use proper_style::{declarations, resolve, Declarations, Diagnostic, Props, Resolver, StyleConfig};
use serde_json::json;

fn resolved(props: Props) -> serde_json::Value {
    serde_json::to_value(resolve(&props).declarations).unwrap()
}

#[test]
fn test_merge_overwrite_and_append() {
    let merged = declarations! { "color" => "red" }.merged(declarations! { "color" => "blue" });
    assert_eq!(merged, declarations! { "color" => "blue" });

    let merged = declarations! { "boxShadow" => vec!["a"] }
        .merged(declarations! { "boxShadow" => vec!["b"] });
    assert_eq!(merged, declarations! { "boxShadow" => vec!["a", "b"] });
}

#[test]
fn test_alias_substitution_and_passthrough() {
    assert_eq!(resolved(Props::new().with("display", "flex")), json!({ "display": "flex" }));
    assert_eq!(
        resolved(Props::new().with("display", "inline-grid")),
        json!({ "display": "inline-grid" })
    );
}

#[test]
fn test_pseudo_nesting_order() {
    assert_eq!(
        resolved(Props::new().with("color", ":hover::before=red")),
        json!({ "&:hover": { "&::before": { "color": "red" } } })
    );
}

#[test]
fn test_bracket_escape() {
    assert_eq!(parse_statement("content=[a=b]").value, "a=b");
    assert_eq!(
        resolved(Props::new().with("content", "[a=b]")),
        json!({ "content": "\"a=b\"" })
    );
}

#[test]
fn test_media_wrapping() {
    assert_eq!(
        resolved(Props::new().with("display", "@md=block")),
        json!({ "@media (min-width: 768px)": { "display": "block" } })
    );
}

#[test]
fn test_preset_split() {
    assert_eq!(
        resolved(Props::new().with("flexRow", "between,center")),
        json!({ "display": "flex", "justifyContent": "space-between", "alignItems": "center" })
    );
    assert_eq!(
        resolved(Props::new().with("flexXY", "center,center,col")),
        json!({
            "display": "flex",
            "justifyContent": "center",
            "alignItems": "center",
            "flexDirection": "column"
        })
    );
}

#[test]
fn test_unknown_props_are_robust() {
    let resolution = resolve(&Props::new().with("onClick", "x").with("aria-label", "Close"));
    assert_eq!(resolution.declarations, Declarations::new());
    assert!(resolution.diagnostics.is_empty());
}

#[test]
fn test_empty_value_emits_one_diagnostic() {
    let resolution = resolve(&Props::new().with("bg", ""));
    assert!(resolution.declarations.is_empty());
    assert_eq!(resolution.diagnostics, vec![Diagnostic::EmptyValue { prop: "bg".into() }]);
}

#[test]
fn test_component_like_props() {
    let props: Props = serde_json::from_value(json!({
        "p": "4|@md=8",
        "bg": "white|:hover=gray100|@dark=gray900",
        "radius": "8px",
        "contentAfter": "→",
        "hover": "color=blue600;textDecoration=underline",
        "nthChild": ["odd", "bg=gray50"],
        "directChild": ["svg", "w=4;h=4"],
        "className": "card",
    }))
    .unwrap();

    let resolution = resolve(&props);
    assert!(resolution.is_clean());
    assert_eq!(
        serde_json::to_value(&resolution.declarations).unwrap(),
        json!({
            "padding": "1rem",
            "@media (min-width: 768px)": { "padding": "2rem" },
            "background": "#ffffff",
            "&:hover": {
                "background": "#f3f4f6",
                "color": "#2563eb",
                "text-decoration": "underline"
            },
            "@media (prefers-color-scheme: dark)": { "background": "#111827" },
            "border-radius": "8px",
            "&::after": { "content": "\"→\"" },
            "&:nth-child(odd)": { "background": "#f9fafb" },
            "& > svg": { "width": "1rem", "height": "1rem" }
        })
    );
}

#[test]
fn test_statement_order_controls_overrides() {
    assert_eq!(
        resolved(Props::new().with("color", ":hover=red|:hover=blue")),
        json!({ "&:hover": { "color": "blue" } })
    );
}

#[test]
fn test_shared_scope_accumulates() {
    assert_eq!(
        resolved(Props::new().with("color", ":hover=red").with("bg", ":hover=black")),
        json!({ "&:hover": { "color": "red", "background": "#000000" } })
    );
}

#[test]
fn test_strict_resolver() {
    let config = StyleConfig::builtin();
    let props = Props::new().with("color", ":hoover=red|@tablet=blue");
    let resolution = Resolver::new(&config).strict(true).resolve(&props);

    assert_eq!(resolution.declarations, declarations! { "color" => "red" });
    assert_eq!(resolution.diagnostics.len(), 2);
    assert!(resolution.diagnostics.iter().all(|d| d.prop() == "color"));
}

#[test]
fn test_registry_is_plain_data() {
    let registry = AliasRegistry::builtin();
    assert!(registry.len() > 200);
    assert!(registry.names().any(|n| n == "flexColReverse"));
}
