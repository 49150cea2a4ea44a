//! Shared symbolic value tables.
//!
//! The length, fraction and color tables are generated once on first use and
//! shared by every alias that accepts them.
//!
//! | Table | Keys | Example |
//! |-------|------|---------|
//! | [`REM_CASES`] | `0`, `px`, spacing steps | `4` → `1rem` |
//! | [`FRACTION_CASES`] | `n/d` for d in 2, 3, 4, 5, 6, 12 | `1/3` → `33.333333%` |
//! | [`COLOR_CASES`] | `<family><shade>` and keywords | `blue500` → `#3b82f6` |

use once_cell::sync::Lazy;

use super::Options;

/// Spacing steps; each step is a quarter of a rem.
const SPACING_STEPS: &[f64] = &[
    0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 14.0, 16.0,
    20.0, 24.0, 28.0, 32.0, 36.0, 40.0, 44.0, 48.0, 52.0, 56.0, 60.0, 64.0, 72.0, 80.0, 96.0,
];

const FRACTION_DENOMINATORS: &[u32] = &[2, 3, 4, 5, 6, 12];

const SHADES: &[&str] = &["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"];

const PALETTE: &[(&str, [&str; 10])] = &[
    ("gray", ["#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151", "#1f2937", "#111827"]),
    ("red", ["#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c", "#991b1b", "#7f1d1d"]),
    ("yellow", ["#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309", "#92400e", "#78350f"]),
    ("green", ["#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669", "#047857", "#065f46", "#064e3b"]),
    ("blue", ["#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8", "#1e40af", "#1e3a8a"]),
    ("indigo", ["#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5", "#4338ca", "#3730a3", "#312e81"]),
    ("purple", ["#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9", "#5b21b6", "#4c1d95"]),
    ("pink", ["#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777", "#be185d", "#9d174d", "#831843"]),
];

/// Length shortcuts: `0`, `px` and the quarter-rem spacing scale.
pub static REM_CASES: Lazy<Options> = Lazy::new(|| {
    let mut table = Options::new();
    table.insert("0".into(), "0".into());
    table.insert("px".into(), "1px".into());
    for step in SPACING_STEPS {
        table.insert(format!("{}", step), format!("{}rem", step * 0.25));
    }
    table
});

/// Fraction shortcuts expressed as percentages, plus `full`.
pub static FRACTION_CASES: Lazy<Options> = Lazy::new(|| {
    let mut table = Options::new();
    for &denominator in FRACTION_DENOMINATORS {
        for numerator in 1..denominator {
            let percent = f64::from(numerator) / f64::from(denominator) * 100.0;
            table.insert(
                format!("{}/{}", numerator, denominator),
                format!("{}%", trim_decimal(percent)),
            );
        }
    }
    table.insert("full".into(), "100%".into());
    table
});

/// Named colors: palette shades plus CSS keywords.
pub static COLOR_CASES: Lazy<Options> = Lazy::new(|| {
    let mut table = Options::new();
    table.insert("inherit".into(), "inherit".into());
    table.insert("current".into(), "currentColor".into());
    table.insert("transparent".into(), "transparent".into());
    table.insert("black".into(), "#000000".into());
    table.insert("white".into(), "#ffffff".into());
    for (family, hexes) in PALETTE {
        for (shade, hex) in SHADES.iter().zip(hexes.iter()) {
            table.insert(format!("{}{}", family, shade), hex.to_string());
        }
    }
    table
});

/// Formats with at most six decimals, dropping trailing zeros.
fn trim_decimal(value: f64) -> String {
    let formatted = format!("{:.6}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// `flexDirection` sub-values of the flex presets.
pub const FLEX_DIRECTION: &[(&str, &str)] = &[
    ("row", "row"),
    ("rowReverse", "row-reverse"),
    ("col", "column"),
    ("colReverse", "column-reverse"),
    ("initial", "initial"),
    ("inherit", "inherit"),
    ("unset", "unset"),
];

/// `justifyContent` sub-values of the flex presets.
pub const FLEX_JUSTIFY_CONTENT: &[(&str, &str)] = &[
    ("default", "flex-start"),
    ("flexStart", "flex-start"),
    ("flexEnd", "flex-end"),
    ("center", "center"),
    ("between", "space-between"),
    ("around", "space-around"),
    ("evenly", "space-evenly"),
    ("start", "start"),
    ("end", "end"),
    ("left", "left"),
    ("right", "right"),
    ("initial", "initial"),
    ("auto", "auto"),
];

/// `alignItems` sub-values of the flex presets.
pub const FLEX_ALIGN_ITEMS: &[(&str, &str)] = &[
    ("default", "stretch"),
    ("stretch", "stretch"),
    ("flexStart", "flex-start"),
    ("flexEnd", "flex-end"),
    ("center", "center"),
    ("baseline", "baseline"),
    ("start", "start"),
    ("end", "end"),
    ("initial", "initial"),
    ("auto", "auto"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rem_cases() {
        assert_eq!(REM_CASES.get("0").map(String::as_str), Some("0"));
        assert_eq!(REM_CASES.get("px").map(String::as_str), Some("1px"));
        assert_eq!(REM_CASES.get("0.5").map(String::as_str), Some("0.125rem"));
        assert_eq!(REM_CASES.get("4").map(String::as_str), Some("1rem"));
        assert_eq!(REM_CASES.get("96").map(String::as_str), Some("24rem"));
    }

    #[test]
    fn test_fraction_cases() {
        assert_eq!(FRACTION_CASES.get("1/2").map(String::as_str), Some("50%"));
        assert_eq!(FRACTION_CASES.get("1/3").map(String::as_str), Some("33.333333%"));
        assert_eq!(FRACTION_CASES.get("11/12").map(String::as_str), Some("91.666667%"));
        assert_eq!(FRACTION_CASES.get("full").map(String::as_str), Some("100%"));
    }

    #[test]
    fn test_color_cases() {
        assert_eq!(COLOR_CASES.get("blue500").map(String::as_str), Some("#3b82f6"));
        assert_eq!(COLOR_CASES.get("current").map(String::as_str), Some("currentColor"));
        assert_eq!(COLOR_CASES.len(), 5 + PALETTE.len() * SHADES.len());
    }

    #[test]
    fn test_trim_decimal() {
        assert_eq!(trim_decimal(50.0), "50");
        assert_eq!(trim_decimal(12.5), "12.5");
    }
}
