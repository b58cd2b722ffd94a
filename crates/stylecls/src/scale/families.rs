//! Token tables for the built-in families.
//!
//! Names use the hyphenated upstream spelling (`flx-i`, `br--top`); the alias
//! normalization pass adds the underscore form.

use crate::fragment::PropertyValue;

/// Literal value of a fixed-family property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Literal {
    Num(f64),
    Text(&'static str),
}

impl Literal {
    pub(crate) fn to_value(self) -> PropertyValue {
        match self {
            Literal::Num(n) => PropertyValue::Number(n),
            Literal::Text(s) => PropertyValue::Text(s.to_string()),
        }
    }
}

use Literal::{Num, Text};

/// Spacing prefixes and their property stem.
pub(crate) const SPACING: &[(&str, &str)] = &[("p", "padding"), ("m", "margin")];

/// Direction suffixes and the property suffixes each one sets.
pub(crate) const DIRECTIONS: &[(&str, &[&str])] = &[
    ("a", &[""]),
    ("l", &["Left"]),
    ("r", &["Right"]),
    ("t", &["Top"]),
    ("b", &["Bottom"]),
    ("h", &["Left", "Right"]),
    ("v", &["Top", "Bottom"]),
];

/// Sizing prefixes; all share the sizing progression.
pub(crate) const SIZING: &[(&str, &str)] = &[
    ("w", "width"),
    ("h", "height"),
    ("min-w", "minWidth"),
    ("max-w", "maxWidth"),
    ("min-h", "minHeight"),
    ("max-h", "maxHeight"),
];

/// Percentage sizing steps for `w-<n>` and `h-<n>`.
pub(crate) const PERCENTAGES: &[u32] = &[10, 20, 25, 30, 33, 34, 40, 50, 60, 70, 75, 80, 90, 100];

pub(crate) const FRACTIONS: &[(&str, &str)] =
    &[("third", "33.333333%"), ("two-thirds", "66.666667%")];

/// Type scale, in multiples of the font rem.
pub(crate) const FONT_SIZES: &[(&str, f64)] = &[
    ("f-headline", 6.0),
    ("f-subheadline", 5.0),
    ("f1", 3.0),
    ("f2", 2.25),
    ("f3", 1.5),
    ("f4", 1.25),
    ("f5", 1.0),
    ("f6", 0.875),
];

pub(crate) const OPACITY_SUFFIXES: &[&str] =
    &["90", "80", "70", "60", "50", "40", "30", "20", "10", "05", "025", "0"];

/// `br--<side>` flattens the edge opposite `<side>`.
pub(crate) const RADIUS_SIDES: &[(&str, [&str; 2])] = &[
    ("top", ["borderBottomLeftRadius", "borderBottomRightRadius"]),
    ("bottom", ["borderTopLeftRadius", "borderTopRightRadius"]),
    ("left", ["borderTopRightRadius", "borderBottomRightRadius"]),
    ("right", ["borderTopLeftRadius", "borderBottomLeftRadius"]),
];

pub(crate) const BORDER_WIDTHS: &[(&str, &str)] = &[
    ("ba", "borderWidth"),
    ("bl", "borderLeftWidth"),
    ("br", "borderRightWidth"),
    ("bt", "borderTopWidth"),
    ("bb", "borderBottomWidth"),
];

/// Single-entry families.
pub(crate) const FIXED: &[(&str, &[(&str, Literal)])] = &[
    // borders
    ("bn", &[("borderWidth", Num(0.0))]),
    // flexbox
    ("flx-i", &[("flex", Num(1.0))]),
    ("flx-row", &[("flexDirection", Text("row"))]),
    ("flx-row-reverse", &[("flexDirection", Text("row-reverse"))]),
    ("flx-col-reverse", &[("flexDirection", Text("column-reverse"))]),
    ("flx-wrap", &[("flexWrap", Text("wrap"))]),
    ("flx-nowrap", &[("flexWrap", Text("nowrap"))]),
    ("aifs", &[("alignItems", Text("flex-start"))]),
    ("aife", &[("alignItems", Text("flex-end"))]),
    ("aic", &[("alignItems", Text("center"))]),
    ("aib", &[("alignItems", Text("baseline"))]),
    ("ais", &[("alignItems", Text("stretch"))]),
    ("asfs", &[("alignSelf", Text("flex-start"))]),
    ("asfe", &[("alignSelf", Text("flex-end"))]),
    ("asc", &[("alignSelf", Text("center"))]),
    ("asb", &[("alignSelf", Text("baseline"))]),
    ("ass", &[("alignSelf", Text("stretch"))]),
    ("jcfs", &[("justifyContent", Text("flex-start"))]),
    ("jcfe", &[("justifyContent", Text("flex-end"))]),
    ("jcc", &[("justifyContent", Text("center"))]),
    ("jcsb", &[("justifyContent", Text("space-between"))]),
    ("jcsa", &[("justifyContent", Text("space-around"))]),
    // font weight
    ("normal", &[("fontWeight", Text("normal"))]),
    ("b", &[("fontWeight", Text("bold"))]),
    ("fw1", &[("fontWeight", Text("100"))]),
    ("fw2", &[("fontWeight", Text("200"))]),
    ("fw3", &[("fontWeight", Text("300"))]),
    ("fw4", &[("fontWeight", Text("400"))]),
    ("fw5", &[("fontWeight", Text("500"))]),
    ("fw6", &[("fontWeight", Text("600"))]),
    ("fw7", &[("fontWeight", Text("700"))]),
    ("fw8", &[("fontWeight", Text("800"))]),
    ("fw9", &[("fontWeight", Text("900"))]),
    // font style
    ("i", &[("fontStyle", Text("italic"))]),
    ("fs-normal", &[("fontStyle", Text("normal"))]),
    // text
    ("tl", &[("textAlign", Text("left"))]),
    ("tc", &[("textAlign", Text("center"))]),
    ("tr", &[("textAlign", Text("right"))]),
    ("tj", &[("textAlign", Text("justify"))]),
    ("strike", &[("textDecorationLine", Text("line-through"))]),
    ("underline", &[("textDecorationLine", Text("underline"))]),
    ("no-underline", &[("textDecorationLine", Text("none"))]),
    ("ttc", &[("textTransform", Text("capitalize"))]),
    ("ttl", &[("textTransform", Text("lowercase"))]),
    ("ttu", &[("textTransform", Text("uppercase"))]),
    ("ttn", &[("textTransform", Text("none"))]),
    // position
    ("absolute", &[("position", Text("absolute"))]),
    ("relative", &[("position", Text("relative"))]),
    (
        "absolute-fill",
        &[
            ("position", Text("absolute")),
            ("top", Num(0.0)),
            ("left", Num(0.0)),
            ("right", Num(0.0)),
            ("bottom", Num(0.0)),
        ],
    ),
    ("top-0", &[("top", Num(0.0))]),
    ("right-0", &[("right", Num(0.0))]),
    ("bottom-0", &[("bottom", Num(0.0))]),
    ("left-0", &[("left", Num(0.0))]),
    // overflow
    ("overflow-visible", &[("overflow", Text("visible"))]),
    ("overflow-hidden", &[("overflow", Text("hidden"))]),
    ("overflow-scroll", &[("overflow", Text("scroll"))]),
    // image resize modes
    ("rm-contain", &[("resizeMode", Text("contain"))]),
    ("rm-cover", &[("resizeMode", Text("cover"))]),
    ("rm-stretch", &[("resizeMode", Text("stretch"))]),
    ("rm-center", &[("resizeMode", Text("center"))]),
    ("rm-repeat", &[("resizeMode", Text("repeat"))]),
];
