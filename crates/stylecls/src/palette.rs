//! Font and palette generators.
//!
//! Each configured font alias becomes one `ff_<alias>` token. Each palette
//! color becomes three tokens: the bare name sets `color`, `bg_<name>` sets
//! `backgroundColor` and `b__<name>` sets `borderColor`.
//!
//! Names are registered whole. A palette entry named `light_green` produces
//! `bg_light_green`, never a split on its underscores.

use std::collections::BTreeMap;

use crate::fragment::StyleFragment;
use crate::table::StyleTable;

/// Registers `ff_<alias> -> {fontFamily}` for each font alias.
pub(crate) fn register_fonts(table: &mut StyleTable, fonts: &BTreeMap<String, String>) {
    for (alias, family) in fonts {
        table.register(
            &format!("ff_{}", alias),
            StyleFragment::single("fontFamily", family.as_str()),
        );
    }
}

/// Registers the color, background and border tokens for each palette entry.
pub(crate) fn register_palette(table: &mut StyleTable, palette: &BTreeMap<String, String>) {
    for (name, value) in palette {
        for (token, property) in palette_tokens(name) {
            table.register(&token, StyleFragment::single(property, value.as_str()));
        }
    }
}

/// The three tokens a palette entry expands to, with their property.
pub fn palette_tokens(name: &str) -> [(String, &'static str); 3] {
    [
        (name.to_string(), "color"),
        (format!("bg_{}", name), "backgroundColor"),
        (format!("b__{}", name), "borderColor"),
    ]
}
