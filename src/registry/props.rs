//! Built-in alias table.
//!
//! Groups are registered in order; a later definition of the same alias
//! replaces an earlier one.

use super::units::{COLOR_CASES, FRACTION_CASES, REM_CASES};
use super::AliasEntry;

fn prop(name: &str, property: &str) -> AliasEntry {
    AliasEntry::property(name, property)
}

fn spaced(name: &str, property: &str) -> AliasEntry {
    prop(name, property).option_table(&REM_CASES)
}

fn sized(name: &str, property: &str) -> AliasEntry {
    prop(name, property)
        .option_table(&REM_CASES)
        .option_table(&FRACTION_CASES)
}

fn colored(name: &str, property: &str) -> AliasEntry {
    prop(name, property).option_table(&COLOR_CASES)
}

/// `none`, `subgrid` and `1`..`12` equal tracks.
fn track_cases() -> Vec<(String, String)> {
    let mut cases = vec![
        ("none".to_string(), "none".to_string()),
        ("subgrid".to_string(), "subgrid".to_string()),
    ];
    cases.extend((1..=12).map(|n| (n.to_string(), format!("repeat({}, minmax(0, 1fr))", n))));
    cases
}

/// `auto`, `span1`..`span12` and `spanFull`.
fn span_cases() -> Vec<(String, String)> {
    let mut cases = vec![("auto".to_string(), "auto".to_string())];
    cases.extend((1..=12).map(|n| (format!("span{}", n), format!("span {} / span {}", n, n))));
    cases.push(("spanFull".to_string(), "span 1 / -1".to_string()));
    cases
}

/// `auto` plus `1`..`10` pixels.
fn pixel_cases(extra: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut cases = vec![("auto".to_string(), "auto".to_string())];
    cases.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    cases.extend((1..=10).map(|n| (n.to_string(), format!("{}px", n))));
    cases
}

fn owned(entry: AliasEntry, cases: Vec<(String, String)>) -> AliasEntry {
    let pairs: Vec<(&str, &str)> = cases.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    entry.options(&pairs)
}

const BREAK: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("avoid", "avoid"),
    ("all", "all"),
    ("avoidPage", "avoid-page"),
    ("page", "page"),
    ("left", "left"),
    ("right", "right"),
    ("column", "column"),
];

const OVERFLOW: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("hidden", "hidden"),
    ("clip", "clip"),
    ("visible", "visible"),
    ("scroll", "scroll"),
];

const OVERSCROLL: &[(&str, &str)] = &[("auto", "auto"), ("contain", "contain"), ("none", "none")];

const SIZE_KEYWORDS: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("full", "100%"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

const BOUND_KEYWORDS: &[(&str, &str)] = &[
    ("px", "1px"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("full", "100%"),
    ("fit", "fit-content"),
];

const AUTO_TRACKS: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("minContent", "min-content"),
    ("maxContent", "max-content"),
    ("fr", "minmax(0, 1fr)"),
];

const TEXT_ALIGN: &[(&str, &str)] = &[
    ("left", "left"),
    ("right", "right"),
    ("center", "center"),
    ("justify", "justify"),
];

const DECORATION_LINE: &[(&str, &str)] = &[
    ("none", "none"),
    ("underline", "underline"),
    ("overline", "overline"),
    ("lineThrough", "line-through"),
];

const BOX_AREA: &[(&str, &str)] = &[
    ("borderBox", "border-box"),
    ("paddingBox", "padding-box"),
    ("contentBox", "content-box"),
];

const FONT_SIZES: &[(&str, &str)] = &[
    ("xs", "0.625rem"),
    ("sm", "0.75rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
    ("6xl", "3.75rem"),
    ("7xl", "4.5rem"),
    ("8xl", "6rem"),
    ("9xl", "8rem"),
];

const LINE_HEIGHTS: &[(&str, &str)] = &[
    ("xs", "1rem"),
    ("sm", "1.25rem"),
    ("base", "1.5rem"),
    ("lg", "1.75rem"),
    ("xl", "1.75"),
    ("2xl", "2rem"),
    ("3xl", "2.25rem"),
    ("4xl", "2.5rem"),
    ("5xl", "1"),
    ("6xl", "1"),
    ("7xl", "1"),
    ("8xl", "1"),
    ("9xl", "1"),
];

const FONT_FAMILIES: &[(&str, &str)] = &[
    ("sans", "ui-sans-serif, system-ui, -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, \"Noto Sans\", sans-serif"),
    ("serif", "ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif"),
    ("mono", "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", \"Courier New\", monospace"),
];

const FONT_WEIGHTS: &[(&str, &str)] = &[
    ("thin", "100"),
    ("extraLight", "200"),
    ("light", "300"),
    ("normal", "400"),
    ("medium", "500"),
    ("semiBold", "600"),
    ("bold", "700"),
    ("extraBold", "800"),
    ("black", "900"),
];

const BORDER_STYLES: &[(&str, &str)] = &[
    ("none", "none"),
    ("solid", "solid"),
    ("dotted", "dotted"),
    ("dashed", "dashed"),
    ("double", "double"),
    ("groove", "groove"),
    ("ridge", "ridge"),
    ("inset", "inset"),
    ("outset", "outset"),
];

const EMPHASIS_COLOR_KEYWORDS: &[(&str, &str)] =
    &[("current", "currentColor"), ("transparent", "transparent")];

pub(crate) fn builtin_entries() -> Vec<AliasEntry> {
    let mut entries = Vec::with_capacity(320);
    layout(&mut entries);
    flexbox_and_grid(&mut entries);
    spacing(&mut entries);
    typography(&mut entries);
    background(&mut entries);
    border(&mut entries);
    shadow(&mut entries);
    animation(&mut entries);
    misc(&mut entries);
    entries
}

fn layout(e: &mut Vec<AliasEntry>) {
    e.push(prop("aspect", "aspect-ratio").options(&[
        ("auto", "auto"),
        ("square", "1 / 1"),
        ("widescreen", "16 / 9"),
        ("standard", "4 / 3"),
        ("photo", "3 / 2"),
        ("cinema", "2.39 / 1"),
        ("ultrawide", "21 / 9"),
        ("vertical", "9 / 16"),
    ]));
    e.push(prop("columns", "columns"));
    e.push(prop("columnCount", "column-count"));
    e.push(prop("columnFill", "column-fill"));
    e.push(prop("columnsGap", "column-gap"));
    e.push(prop("columnRule", "column-rule"));
    e.push(prop("columnRuleColor", "column-rule-color"));
    e.push(prop("columnRuleStyle", "column-rule-style"));
    e.push(prop("columnRuleWidth", "column-rule-width"));
    e.push(prop("columnSpan", "column-span"));
    e.push(prop("columnWidth", "column-width"));
    e.push(prop("breakAfter", "break-after").options(BREAK));
    e.push(prop("breakBefore", "break-before").options(BREAK));
    e.push(prop("breakInside", "break-inside").options(&[
        ("auto", "auto"),
        ("avoid", "avoid"),
        ("avoidPage", "avoid-page"),
        ("avoidColumn", "avoid-column"),
    ]));
    e.push(prop("boxDecorationBreak", "box-decoration-break").options(&[("slice", "slice"), ("clone", "clone")]));
    e.push(prop("boxSizing", "box-sizing").options(&[("border", "border-box"), ("content", "content-box")]));
    e.push(prop("display", "display").options(&[
        ("hidden", "none"),
        ("block", "block"),
        ("inline", "inline"),
        ("flex", "flex"),
        ("grid", "grid"),
        ("table", "table"),
        ("inlineBlock", "inline-block"),
        ("inlineFlex", "inline-flex"),
        ("inlineGrid", "inline-grid"),
        ("inlineTable", "inline-table"),
        ("tableCaption", "table-caption"),
        ("tableCell", "table-cell"),
        ("tableColumn", "table-column"),
        ("tableRowGroup", "table-row-group"),
        ("tableRow", "table-row"),
        ("flowRoot", "flow-root"),
        ("contents", "contents"),
        ("listItem", "list-item"),
        ("tableColumnGroup", "table-column-group"),
        ("tableFooterGroup", "table-footer-group"),
        ("tableHeaderGroup", "table-header-group"),
    ]));
    e.push(prop("float", "float").options(&[
        ("start", "inline-start"),
        ("end", "inline-end"),
        ("left", "left"),
        ("right", "right"),
        ("none", "none"),
    ]));
    e.push(prop("clear", "clear").options(&[
        ("none", "none"),
        ("start", "inline-start"),
        ("end", "inline-end"),
        ("left", "left"),
        ("right", "right"),
        ("both", "both"),
    ]));
    e.push(prop("isolation", "isolation").options(&[("auto", "auto"), ("isolate", "isolate")]));
    e.push(prop("objectFit", "object-fit").options(&[
        ("contain", "contain"),
        ("cover", "cover"),
        ("fill", "fill"),
        ("none", "none"),
        ("scaleDown", "scale-down"),
    ]));
    e.push(prop("objectPosition", "object-position").options(&[
        ("bottom", "bottom"),
        ("center", "center"),
        ("left", "left"),
        ("leftBottom", "left bottom"),
        ("leftTop", "left top"),
        ("right", "right"),
        ("rightBottom", "right bottom"),
        ("rightTop", "right top"),
        ("top", "top"),
    ]));
    e.push(prop("overflow", "overflow").options(OVERFLOW));
    e.push(prop("overflowX", "overflow-x").options(OVERFLOW));
    e.push(prop("overflowY", "overflow-y").options(OVERFLOW));
    e.push(prop("overflowWrap", "overflow-wrap").options(&[
        ("normal", "normal"),
        ("breakWord", "break-word"),
        ("anywhere", "anywhere"),
    ]));
    e.push(prop("overscrollBehavior", "overscroll-behavior").options(OVERSCROLL));
    e.push(prop("overscrollBehaviorX", "overscroll-behavior-x").options(OVERSCROLL));
    e.push(prop("overscrollBehaviorY", "overscroll-behavior-y").options(OVERSCROLL));
    e.push(prop("position", "position").options(&[
        ("static", "static"),
        ("relative", "relative"),
        ("absolute", "absolute"),
        ("fixed", "fixed"),
        ("sticky", "sticky"),
    ]));
    e.push(spaced("top", "top"));
    e.push(spaced("right", "right"));
    e.push(spaced("bottom", "bottom"));
    e.push(spaced("left", "left"));
    e.push(spaced("inset", "inset"));
    e.push(prop("visibility", "visibility").options(&[
        ("visible", "visible"),
        ("hidden", "hidden"),
        ("collapse", "collapse"),
    ]));
    e.push(prop("zIndex", "z-index"));
}

fn flexbox_and_grid(e: &mut Vec<AliasEntry>) {
    e.push(
        prop("basis", "flex-basis")
            .options(&[("auto", "auto")])
            .option_table(&REM_CASES)
            .option_table(&FRACTION_CASES),
    );
    e.push(prop("flexDirection", "flex-direction").options(&[
        ("row", "row"),
        ("rowReverse", "row-reverse"),
        ("column", "column"),
        ("columnReverse", "column-reverse"),
    ]));
    e.push(prop("flexWrap", "flex-wrap").options(&[
        ("nowrap", "nowrap"),
        ("wrap", "wrap"),
        ("wrapReverse", "wrap-reverse"),
    ]));
    e.push(prop("flex", "flex").options(&[
        ("1", "1 1 0%"),
        ("auto", "1 1 auto"),
        ("initial", "0 1 auto"),
        ("none", "none"),
    ]));
    e.push(prop("flexGrow", "flex-grow"));
    e.push(prop("flexShrink", "flex-shrink"));
    e.push(prop("order", "order").options(&[("first", "-9999"), ("last", "9999")]));
    e.push(owned(prop("cols", "grid-template-columns"), track_cases()));
    e.push(prop("colStart", "grid-column-start").options(&[("auto", "auto")]));
    e.push(prop("colEnd", "grid-column-end").options(&[("auto", "auto")]));
    e.push(owned(prop("col", "grid-column"), span_cases()));
    e.push(owned(prop("rows", "grid-template-rows"), track_cases()));
    e.push(prop("rowStart", "grid-row-start").options(&[("auto", "auto")]));
    e.push(prop("rowEnd", "grid-row-end").options(&[("auto", "auto")]));
    e.push(owned(prop("row", "grid-row"), span_cases()));
    e.push(prop("autoFlow", "grid-auto-flow").options(&[
        ("row", "row"),
        ("column", "column"),
        ("rowDense", "row dense"),
        ("columnDense", "column dense"),
    ]));
    e.push(prop("autoCols", "grid-auto-columns").options(AUTO_TRACKS));
    e.push(prop("autoRows", "grid-auto-rows").options(AUTO_TRACKS));
    e.push(spaced("gap", "gap"));
    e.push(spaced("gapX", "column-gap"));
    e.push(spaced("gapY", "row-gap"));
    e.push(prop("justifyContent", "justify-content").options(&[
        ("normal", "normal"),
        ("start", "start"),
        ("end", "end"),
        ("flexStart", "flex-start"),
        ("flexEnd", "flex-end"),
        ("center", "center"),
        ("between", "space-between"),
        ("around", "space-around"),
        ("evenly", "space-evenly"),
        ("stretch", "stretch"),
    ]));
    e.push(prop("justifyItems", "justify-items").options(&[
        ("start", "start"),
        ("end", "end"),
        ("center", "center"),
        ("stretch", "stretch"),
        ("flexStart", "flex-start"),
        ("flexEnd", "flex-end"),
    ]));
    e.push(prop("justifySelf", "justify-self").options(&[
        ("auto", "auto"),
        ("start", "start"),
        ("end", "end"),
        ("center", "center"),
        ("stretch", "stretch"),
        ("flexStart", "flex-start"),
        ("flexEnd", "flex-end"),
    ]));
    e.push(prop("alignContent", "align-content").options(&[
        ("normal", "normal"),
        ("center", "center"),
        ("start", "start"),
        ("end", "end"),
        ("flexStart", "flex-start"),
        ("flexEnd", "flex-end"),
        ("between", "space-between"),
        ("around", "space-around"),
        ("evenly", "space-evenly"),
        ("stretch", "stretch"),
        ("baseline", "baseline"),
    ]));
    e.push(prop("alignItems", "align-items").options(&[
        ("flexStart", "flex-start"),
        ("flexEnd", "flex-end"),
        ("start", "start"),
        ("end", "end"),
        ("center", "center"),
        ("baseline", "baseline"),
        ("stretch", "stretch"),
    ]));
    e.push(prop("alignSelf", "align-self").options(&[
        ("auto", "auto"),
        ("flexStart", "flex-start"),
        ("flexEnd", "flex-end"),
        ("start", "start"),
        ("end", "end"),
        ("center", "center"),
        ("baseline", "baseline"),
        ("stretch", "stretch"),
    ]));
    e.push(prop("placeContent", "place-content"));
    e.push(prop("placeItems", "place-items"));
    e.push(prop("placeSelf", "place-self"));
    e.push(AliasEntry::flex_preset("flexXY", None, true));
    e.push(AliasEntry::flex_preset("flexRow", None, false));
    e.push(AliasEntry::flex_preset("flexRowReverse", Some("row-reverse"), false));
    e.push(AliasEntry::flex_preset("flexCol", Some("column"), false));
    e.push(AliasEntry::flex_preset("flexColReverse", Some("column-reverse"), false));
}

fn spacing(e: &mut Vec<AliasEntry>) {
    e.push(spaced("p", "padding"));
    e.push(spaced("pt", "padding-top"));
    e.push(spaced("pr", "padding-right"));
    e.push(spaced("pb", "padding-bottom"));
    e.push(spaced("pl", "padding-left"));
    e.push(AliasEntry::properties("py", &["padding-top", "padding-bottom"]).option_table(&REM_CASES));
    e.push(AliasEntry::properties("px", &["padding-left", "padding-right"]).option_table(&REM_CASES));
    e.push(spaced("m", "margin"));
    e.push(spaced("mt", "margin-top"));
    e.push(spaced("mr", "margin-right"));
    e.push(spaced("mb", "margin-bottom"));
    e.push(spaced("ml", "margin-left"));
    e.push(AliasEntry::properties("my", &["margin-top", "margin-bottom"]).option_table(&REM_CASES));
    e.push(AliasEntry::properties("mx", &["margin-left", "margin-right"]).option_table(&REM_CASES));

    e.push(sized("w", "width").options(SIZE_KEYWORDS).options(&[("screen", "100vw")]));
    e.push(sized("minW", "min-width").options(BOUND_KEYWORDS));
    e.push(sized("maxW", "max-width").options(BOUND_KEYWORDS));
    e.push(sized("h", "height").options(SIZE_KEYWORDS).options(&[("screen", "100vh")]));
    e.push(sized("minH", "min-height").options(BOUND_KEYWORDS));
    e.push(sized("maxH", "max-height").options(BOUND_KEYWORDS));
    e.push(
        AliasEntry::properties("size", &["width", "height"])
            .option_table(&REM_CASES)
            .option_table(&FRACTION_CASES)
            .options(SIZE_KEYWORDS)
            .options(&[("screen", "100vw")]),
    );
}

fn typography(e: &mut Vec<AliasEntry>) {
    e.push(prop("family", "font-family").options(FONT_FAMILIES));
    e.push(prop("fs", "font-size").options(FONT_SIZES));
    e.push(prop("fontSmoothing", "-webkit-font-smoothing").options(&[
        ("antialiased", "antialiased"),
        ("subpixel", "auto"),
    ]));
    e.push(prop("fontStyle", "font-style").options(&[("normal", "normal"), ("italic", "italic")]));
    e.push(prop("fw", "font-weight").options(FONT_WEIGHTS));
    e.push(prop("fontVariant", "font-variant"));
    e.push(prop("fontVariantAlternates", "font-variant-alternates"));
    e.push(prop("fontVariantCaps", "font-variant-caps"));
    e.push(prop("fontVariantEastAsian", "font-variant-east-asian"));
    e.push(prop("fontVariantLigatures", "font-variant-ligatures"));
    e.push(prop("fontVariantNumeric", "font-variant-numeric"));
    e.push(prop("fontVariantPosition", "font-variant-position"));
    e.push(prop("fontFeatureSettings", "font-feature-settings"));
    e.push(prop("fontKerning", "font-kerning"));
    e.push(prop("fontLanguageOverride", "font-language-override"));
    e.push(prop("lh", "line-height").options(LINE_HEIGHTS));
    e.push(spaced("letterSpacing", "letter-spacing"));
    e.push(spaced("wordSpacing", "word-spacing"));
    e.push(prop("listStyle", "list-style"));
    e.push(prop("listStyleType", "list-style-type").options(&[
        ("none", "none"),
        ("disc", "disc"),
        ("decimal", "decimal"),
    ]));
    e.push(prop("listStylePosition", "list-style-position").options(&[
        ("inside", "inside"),
        ("outside", "outside"),
    ]));
    e.push(prop("listStyleImage", "list-style-image").options(&[("none", "none")]));
    e.push(prop("textAlign", "text-align").options(TEXT_ALIGN));
    e.push(prop("textAlignLast", "text-align-last").options(TEXT_ALIGN));
    e.push(colored("color", "color"));
    e.push(prop("textDecoration", "text-decoration").options(DECORATION_LINE));
    e.push(
        prop("textDecorationColor", "text-decoration-color")
            .options(EMPHASIS_COLOR_KEYWORDS)
            .option_table(&COLOR_CASES),
    );
    e.push(
        prop("textDecorationLine", "text-decoration-line")
            .options(DECORATION_LINE)
            .options(&[("blink", "blink")]),
    );
    e.push(prop("textDecorationStyle", "text-decoration-style").options(&[
        ("solid", "solid"),
        ("double", "double"),
        ("dotted", "dotted"),
        ("dashed", "dashed"),
        ("wavy", "wavy"),
    ]));
    e.push(owned(
        prop("textDecorationThickness", "text-decoration-thickness"),
        pixel_cases(&[("fromFont", "from-font")]),
    ));
    e.push(owned(
        prop("textUnderlineOffset", "text-underline-offset"),
        pixel_cases(&[]),
    ));
    e.push(prop("textTransform", "text-transform").options(&[
        ("none", "none"),
        ("capitalize", "capitalize"),
        ("uppercase", "uppercase"),
        ("lowercase", "lowercase"),
    ]));
    e.push(prop("textOverflow", "text-overflow").options(&[("clip", "clip"), ("ellipsis", "ellipsis")]));
    e.push(prop("textEmphasis", "text-emphasis"));
    e.push(
        prop("textEmphasisColor", "text-emphasis-color")
            .options(EMPHASIS_COLOR_KEYWORDS)
            .option_table(&COLOR_CASES),
    );
    e.push(prop("textEmphasisPosition", "text-emphasis-position").options(&[
        ("over", "over"),
        ("under", "under"),
        ("right", "right"),
        ("left", "left"),
    ]));
    e.push(prop("textEmphasisStyle", "text-emphasis-style").options(&[
        ("filled", "filled"),
        ("open", "open"),
        ("dot", "dot"),
        ("circle", "circle"),
        ("doubleCircle", "double-circle"),
        ("triangle", "triangle"),
        ("filledSesame", "filled-sesame"),
        ("openSesame", "open-sesame"),
    ]));
    e.push(prop("textJustify", "text-justify").options(&[
        ("auto", "auto"),
        ("interWord", "inter-word"),
        ("interCharacter", "inter-character"),
        ("distribute", "distribute"),
        ("none", "none"),
    ]));
    e.push(prop("textOrientation", "text-orientation").options(&[
        ("mixed", "mixed"),
        ("upright", "upright"),
        ("sideways", "sideways"),
        ("sidewaysRight", "sideways-right"),
        ("glyph", "glyph-orientation-vertical"),
    ]));
    e.push(prop("textShadow", "text-shadow"));
    e.push(prop("textUnderlinePosition", "text-underline-position").options(&[
        ("auto", "auto"),
        ("under", "under"),
        ("left", "left"),
        ("right", "right"),
    ]));
    e.push(prop("textWrap", "text-wrap").options(&[
        ("wrap", "wrap"),
        ("nowrap", "nowrap"),
        ("balance", "balance"),
        ("pretty", "pretty"),
    ]));
    e.push(spaced("textIndent", "text-indent"));
    e.push(prop("verticalAlign", "vertical-align").options(&[
        ("baseline", "baseline"),
        ("top", "top"),
        ("middle", "middle"),
        ("bottom", "bottom"),
        ("textTop", "text-top"),
        ("textBottom", "text-bottom"),
        ("super", "super"),
        ("sub", "sub"),
    ]));
    e.push(prop("whiteSpace", "white-space").options(&[
        ("normal", "normal"),
        ("nowrap", "nowrap"),
        ("pre", "pre"),
        ("preLine", "pre-line"),
        ("preWrap", "pre-wrap"),
        ("breakSpaces", "break-spaces"),
    ]));
    e.push(prop("wordBreak", "word-break").options(&[
        ("normal", "normal"),
        ("breakAll", "break-all"),
        ("keepAll", "keep-all"),
    ]));
    e.push(prop("hyphens", "hyphens").options(&[("none", "none"), ("manual", "manual"), ("auto", "auto")]));
    e.push(AliasEntry::quoted("content", "content", None));
    e.push(AliasEntry::quoted("contentBefore", "content", Some("&::before")).options(&[("none", "none")]));
    e.push(AliasEntry::quoted("contentAfter", "content", Some("&::after")).options(&[("none", "none")]));
    e.push(prop("wordWrap", "word-wrap").options(&[("normal", "normal"), ("breakWord", "break-word")]));
    e.push(prop("writingMode", "writing-mode").options(&[
        ("horizontal", "horizontal-tb"),
        ("vertical", "vertical-rl"),
        ("verticalLr", "vertical-lr"),
    ]));
}

fn background(e: &mut Vec<AliasEntry>) {
    e.push(colored("bg", "background"));
    e.push(prop("bgAttachment", "background-attachment").options(&[
        ("fixed", "fixed"),
        ("local", "local"),
        ("scroll", "scroll"),
    ]));
    e.push(prop("bgBlendMode", "background-blend-mode").options(&[
        ("normal", "normal"),
        ("multiply", "multiply"),
        ("screen", "screen"),
        ("overlay", "overlay"),
        ("darken", "darken"),
        ("lighten", "lighten"),
        ("colorDodge", "color-dodge"),
        ("saturation", "saturation"),
        ("color", "color"),
        ("luminosity", "luminosity"),
    ]));
    e.push(
        prop("bgClip", "background-clip")
            .options(BOX_AREA)
            .options(&[("text", "text"), ("noClip", "border-area")]),
    );
    e.push(colored("bgColor", "background-color"));
    e.push(prop("bgImage", "background-image"));
    e.push(prop("bgOrigin", "background-origin").options(BOX_AREA));
    e.push(prop("bgPosition", "background-position").options(&[
        ("top", "top"),
        ("bottom", "bottom"),
        ("left", "left"),
        ("right", "right"),
        ("center", "center"),
    ]));
    e.push(prop("bgPositionX", "background-position-x").options(&[
        ("left", "left"),
        ("right", "right"),
        ("center", "center"),
    ]));
    e.push(prop("bgPositionY", "background-position-y").options(&[
        ("top", "top"),
        ("bottom", "bottom"),
        ("center", "center"),
    ]));
    e.push(prop("bgRepeat", "background-repeat").options(&[
        ("repeat", "repeat"),
        ("noRepeat", "no-repeat"),
        ("repeatX", "repeat-x"),
        ("repeatY", "repeat-y"),
        ("space", "space"),
        ("round", "round"),
    ]));
    e.push(prop("bgSize", "background-size").options(&[
        ("auto", "auto"),
        ("cover", "cover"),
        ("contain", "contain"),
    ]));
}

fn border(e: &mut Vec<AliasEntry>) {
    e.push(prop("border", "border"));
    e.push(prop("borderTop", "border-top"));
    e.push(prop("borderRight", "border-right"));
    e.push(prop("borderBottom", "border-bottom"));
    e.push(prop("borderLeft", "border-left"));
    e.push(colored("borderColor", "border-color"));
    e.push(prop("borderWidth", "border-width"));
    e.push(prop("borderStyle", "border-style").options(BORDER_STYLES));
    e.push(prop("borderCollapse", "border-collapse").options(&[
        ("collapse", "collapse"),
        ("separate", "separate"),
    ]));
    e.push(prop("borderSpacing", "border-spacing"));
    e.push(prop("borderImage", "border-image"));
    e.push(prop("borderImageOutset", "border-image-outset"));
    e.push(prop("borderImageRepeat", "border-image-repeat").options(&[
        ("stretch", "stretch"),
        ("repeat", "repeat"),
        ("round", "round"),
        ("space", "space"),
    ]));
    e.push(prop("borderImageSlice", "border-image-slice"));
    e.push(prop("borderImageSource", "border-image-source"));
    e.push(prop("borderImageWidth", "border-image-width"));
    e.push(prop("radius", "border-radius"));
    e.push(prop("radiusTl", "border-top-left-radius"));
    e.push(prop("radiusTR", "border-top-right-radius"));
    e.push(prop("radiusBL", "border-bottom-left-radius"));
    e.push(prop("radiusBR", "border-bottom-right-radius"));
}

fn shadow(e: &mut Vec<AliasEntry>) {
    e.push(prop("boxShadow", "box-shadow").options(&[
        ("none", "none"),
        ("light", "0px 1px 3px rgba(0, 0, 0, 0.1)"),
        ("medium", "0px 4px 6px rgba(0, 0, 0, 0.1)"),
        ("heavy", "0px 10px 20px rgba(0, 0, 0, 0.2)"),
    ]));
    e.push(prop("outline", "outline").options(&[
        ("none", "none"),
        ("solid", "1px solid"),
        ("dashed", "1px dashed"),
        ("dotted", "1px dotted"),
    ]));
    e.push(prop("outlineColor", "outline-color").options(&[
        ("primary", "#3498db"),
        ("secondary", "#2ecc71"),
        ("error", "#e74c3c"),
        ("default", "#333"),
    ]));
    e.push(prop("outlineStyle", "outline-style").options(&[
        ("solid", "solid"),
        ("dashed", "dashed"),
        ("dotted", "dotted"),
        ("double", "double"),
    ]));
    e.push(prop("outlineWidth", "outline-width").options(&[
        ("thin", "1px"),
        ("medium", "2px"),
        ("thick", "3px"),
    ]));
}

fn animation(e: &mut Vec<AliasEntry>) {
    e.push(prop("animation", "animation"));
    e.push(prop("animationDelay", "animation-delay"));
    e.push(prop("animationDirection", "animation-direction").options(&[
        ("normal", "normal"),
        ("reverse", "reverse"),
        ("alternate", "alternate"),
        ("alternateReverse", "alternate-reverse"),
    ]));
    e.push(prop("animationDuration", "animation-duration"));
    e.push(prop("animationFillMode", "animation-fill-mode").options(&[
        ("none", "none"),
        ("forwards", "forwards"),
        ("backwards", "backwards"),
        ("both", "both"),
    ]));
    e.push(prop("animationIterCount", "animation-iteration-count").options(&[
        ("infinite", "infinite"),
        ("once", "1"),
        ("twice", "2"),
        ("thrice", "3"),
    ]));
    e.push(prop("animationName", "animation-name"));
    e.push(prop("animationPlayState", "animation-play-state").options(&[
        ("running", "running"),
        ("paused", "paused"),
    ]));
    e.push(prop("animationTimingFunction", "animation-timing-function").options(&[
        ("linear", "linear"),
        ("ease", "ease"),
        ("easeIn", "ease-in"),
        ("easeOut", "ease-out"),
        ("easeInOut", "ease-in-out"),
        ("stepStart", "step-start"),
        ("stepEnd", "step-end"),
    ]));
    e.push(prop("keyframes", "@keyframes"));

    e.push(prop("transition", "transition"));
    e.push(prop("transitionDelay", "transition-delay"));
    e.push(prop("transitionDuration", "transition-duration"));
    e.push(prop("transitionProperty", "transition-property"));
    e.push(prop("transitionTimingFunction", "transition-timing-function"));

    e.push(prop("transform", "transform"));
    e.push(prop("transformOrigin", "transform-origin"));
    e.push(prop("transformStyle", "transform-style"));
    e.push(prop("perspective", "perspective"));
    e.push(prop("perspectiveOrigin", "perspective-origin"));
    e.push(prop("backfaceVisibility", "backface-visibility"));
}

/// Filter, interaction, table, visibility, clip/mask, direction, counter,
/// scroll, shape, rendering and remaining properties.
fn misc(e: &mut Vec<AliasEntry>) {
    const PLAIN: &[(&str, &str)] = &[
        ("filter", "filter"),
        ("backdropFilter", "backdrop-filter"),
        ("mixBlendMode", "mix-blend-mode"),
        ("cursor", "cursor"),
        ("userSelect", "user-select"),
        ("pointerEvents", "pointer-events"),
        ("tableLayout", "table-layout"),
        ("emptyCells", "empty-cells"),
        ("opacity", "opacity"),
        // Replaces the earlier `visibility` definition, dropping its options.
        ("visibility", "visibility"),
        ("resize", "resize"),
        ("clip", "clip"),
        ("clipPath", "clip-path"),
        ("mask", "mask"),
        ("maskType", "mask-type"),
        ("caretColor", "caret-color"),
        ("direction", "direction"),
        ("quotes", "quotes"),
        ("counterIncrement", "counter-increment"),
        ("counterReset", "counter-reset"),
        ("scrollBehavior", "scroll-behavior"),
        ("scrollSnapAlign", "scroll-snap-align"),
        ("scrollSnapStop", "scroll-snap-stop"),
        ("scrollSnapType", "scroll-snap-type"),
        ("shapeImageThreshold", "shape-image-threshold"),
        ("shapeMargin", "shape-margin"),
        ("shapeOutside", "shape-outside"),
        ("imageRendering", "image-rendering"),
        ("willChange", "will-change"),
        ("uBidi", "unicode-bidi"),
        ("orphans", "orphans"),
        ("widows", "widows"),
    ];
    e.extend(PLAIN.iter().map(|(name, property)| prop(name, property)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AliasRegistry;

    const ALL_ALIASES: &[&str] = &[
        "aspect", "columns", "columnCount", "columnFill", "columnsGap", "columnRule",
        "columnRuleColor", "columnRuleStyle", "columnRuleWidth", "columnSpan", "columnWidth",
        "breakAfter", "breakBefore", "breakInside", "boxDecorationBreak", "boxSizing",
        "display", "float", "clear", "isolation", "objectFit", "objectPosition", "overflow",
        "overflowX", "overflowY", "overflowWrap", "overscrollBehavior", "overscrollBehaviorX",
        "overscrollBehaviorY", "position", "top", "right", "bottom", "left", "inset",
        "visibility", "zIndex", "basis", "flexDirection", "flexWrap", "flex", "flexGrow",
        "flexShrink", "order", "cols", "colStart", "colEnd", "col", "rows", "rowStart",
        "rowEnd", "row", "autoFlow", "autoCols", "autoRows", "gap", "gapX", "gapY",
        "justifyContent", "justifyItems", "justifySelf", "alignContent", "alignItems",
        "alignSelf", "placeContent", "placeItems", "placeSelf", "flexXY", "flexRow",
        "flexRowReverse", "flexCol", "flexColReverse", "p", "pt", "pr", "pb", "pl", "py", "px",
        "m", "mt", "mr", "mb", "ml", "my", "mx", "w", "minW", "maxW", "h", "minH", "maxH",
        "size", "family", "fs", "fontSmoothing", "fontStyle", "fw", "fontVariant",
        "fontVariantAlternates", "fontVariantCaps", "fontVariantEastAsian",
        "fontVariantLigatures", "fontVariantNumeric", "fontVariantPosition",
        "fontFeatureSettings", "fontKerning", "fontLanguageOverride", "lh", "letterSpacing",
        "wordSpacing", "listStyle", "listStyleType", "listStylePosition", "listStyleImage",
        "textAlign", "textAlignLast", "color", "textDecoration", "textDecorationColor",
        "textDecorationLine", "textDecorationStyle", "textDecorationThickness",
        "textUnderlineOffset", "textTransform", "textOverflow", "textEmphasis",
        "textEmphasisColor", "textEmphasisPosition", "textEmphasisStyle", "textJustify",
        "textOrientation", "textShadow", "textUnderlinePosition", "textWrap", "textIndent",
        "verticalAlign", "whiteSpace", "wordBreak", "hyphens", "content", "contentBefore",
        "contentAfter", "wordWrap", "writingMode", "bg", "bgAttachment", "bgBlendMode",
        "bgClip", "bgColor", "bgImage", "bgOrigin", "bgPosition", "bgPositionX", "bgPositionY",
        "bgRepeat", "bgSize", "border", "borderTop", "borderRight", "borderBottom",
        "borderLeft", "borderColor", "borderWidth", "borderStyle", "borderCollapse",
        "borderSpacing", "borderImage", "borderImageOutset", "borderImageRepeat",
        "borderImageSlice", "borderImageSource", "borderImageWidth", "radius", "radiusTl",
        "radiusTR", "radiusBL", "radiusBR", "boxShadow", "outline", "outlineColor",
        "outlineStyle", "outlineWidth", "animation", "animationDelay", "animationDirection",
        "animationDuration", "animationFillMode", "animationIterCount", "animationName",
        "animationPlayState", "animationTimingFunction", "keyframes", "transition",
        "transitionDelay", "transitionDuration", "transitionProperty",
        "transitionTimingFunction", "transform", "transformOrigin", "transformStyle",
        "perspective", "perspectiveOrigin", "backfaceVisibility", "filter", "backdropFilter",
        "mixBlendMode", "cursor", "userSelect", "pointerEvents", "tableLayout", "emptyCells",
        "opacity", "resize", "clip", "clipPath", "mask", "maskType", "caretColor", "direction",
        "quotes", "counterIncrement", "counterReset", "scrollBehavior", "scrollSnapAlign",
        "scrollSnapStop", "scrollSnapType", "shapeImageThreshold", "shapeMargin",
        "shapeOutside", "imageRendering", "willChange", "uBidi", "orphans", "widows",
    ];

    #[test]
    fn test_builtin_has_every_alias() {
        let registry = AliasRegistry::builtin();
        for name in ALL_ALIASES {
            assert!(registry.contains(name), "missing alias {}", name);
        }
        assert_eq!(registry.len(), ALL_ALIASES.len());
    }

    #[test]
    fn test_overflow_wrap_and_overscroll() {
        let registry = AliasRegistry::builtin();
        let wrap = registry.emit("overflowWrap", "breakWord").unwrap();
        assert_eq!(wrap.get("overflow-wrap").and_then(|v| v.as_text()), Some("break-word"));
        let wrap = registry.emit("overflowWrap", "anywhere").unwrap();
        assert_eq!(wrap.get("overflow-wrap").and_then(|v| v.as_text()), Some("anywhere"));
        let y = registry.emit("overscrollBehaviorY", "contain").unwrap();
        assert_eq!(y.get("overscroll-behavior-y").and_then(|v| v.as_text()), Some("contain"));
        assert!(!registry.contains("overscroll"));
    }

    #[test]
    fn test_grid_tracks() {
        let registry = AliasRegistry::builtin();
        let cols = registry.emit("cols", "3").unwrap();
        assert_eq!(
            cols.get("grid-template-columns").and_then(|v| v.as_text()),
            Some("repeat(3, minmax(0, 1fr))")
        );
        let col = registry.emit("col", "spanFull").unwrap();
        assert_eq!(col.get("grid-column").and_then(|v| v.as_text()), Some("span 1 / -1"));
    }

    #[test]
    fn test_height_screen_uses_viewport_height() {
        let registry = AliasRegistry::builtin();
        let h = registry.emit("h", "screen").unwrap();
        assert_eq!(h.get("height").and_then(|v| v.as_text()), Some("100vh"));
        let w = registry.emit("w", "screen").unwrap();
        assert_eq!(w.get("width").and_then(|v| v.as_text()), Some("100vw"));
    }

    #[test]
    fn test_size_keywords_override_fractions() {
        let registry = AliasRegistry::builtin();
        let w = registry.emit("w", "full").unwrap();
        assert_eq!(w.get("width").and_then(|v| v.as_text()), Some("100%"));
        let min_w = registry.emit("minW", "px").unwrap();
        assert_eq!(min_w.get("min-width").and_then(|v| v.as_text()), Some("1px"));
    }

    #[test]
    fn test_thickness_cases() {
        let registry = AliasRegistry::builtin();
        let t = registry.emit("textDecorationThickness", "fromFont").unwrap();
        assert_eq!(
            t.get("text-decoration-thickness").and_then(|v| v.as_text()),
            Some("from-font")
        );
        let o = registry.emit("textUnderlineOffset", "3").unwrap();
        assert_eq!(o.get("text-underline-offset").and_then(|v| v.as_text()), Some("3px"));
    }
}
