//! Table building and resolution through the public API.

use std::collections::HashMap;

use stylecls::{
    fragment, BuildError, StyleConfig, StyleFragment, StyleTable, TableBuilder,
    UnresolvedTokenError,
};

fn fake_sheet(sheet: HashMap<String, StyleFragment>) -> HashMap<String, StyleFragment> {
    sheet
}

fn build(config: &StyleConfig) -> StyleTable {
    TableBuilder::new(config).build_with(&fake_sheet).unwrap()
}

// ============================================================================
// Built-in styles
// ============================================================================

#[test]
fn styles_has_builtin_examples() {
    let table = build(&StyleConfig::default());
    for token in ["w1", "w5", "pb7", "f1", "absolute_fill", "flx_i"] {
        assert!(table.contains(token), "missing {}", token);
    }
}

#[test]
fn styles_scale_values() {
    let table = build(&StyleConfig::default());
    assert_eq!(table.get("pa3"), Some(&fragment! { "padding" => 16 }));
    assert_eq!(table.get("br3"), Some(&fragment! { "borderRadius" => 8 }));
    assert_eq!(table.get("bl"), Some(&fragment! { "borderLeftWidth" => 1 }));
    assert_eq!(
        table.get("br__top"),
        Some(&fragment! { "borderBottomLeftRadius" => 0, "borderBottomRightRadius" => 0 })
    );
    assert_eq!(table.get("o_025"), Some(&fragment! { "opacity" => 0.025 }));
    assert_eq!(table.get("min_w3"), Some(&fragment! { "minWidth" => 64 }));
    assert_eq!(table.get("max_w3"), Some(&fragment! { "maxWidth" => 64 }));
    assert_eq!(table.get("min_h4"), Some(&fragment! { "minHeight" => 128 }));
    assert_eq!(table.get("max_h4"), Some(&fragment! { "maxHeight" => 128 }));
}

#[test]
fn sizes_follow_scale_tokens() {
    let table = build(&StyleConfig::default());
    assert_eq!(table.size("pa3"), Some(16.0));
    assert_eq!(table.size("max_w2"), Some(32.0));
    assert_eq!(table.size("max-w2"), Some(32.0));
}

// ============================================================================
// Fonts, palette, custom styles, shortcuts
// ============================================================================

#[test]
fn fonts_register_font_family() {
    let config = StyleConfig::from_yaml("fonts:\n  iowan: Iowan Old Style\n").unwrap();
    let table = build(&config);
    assert_eq!(
        table.get("ff_iowan"),
        Some(&fragment! { "fontFamily" => "Iowan Old Style" })
    );
}

#[test]
fn colors_register_palette_triples() {
    let config = StyleConfig::from_yaml(
        r##"
        colors:
          palette:
            green: "#00FF00"
            light_green: "#00FF00"
        "##,
    )
    .unwrap();
    let table = build(&config);

    assert_eq!(table.get("green"), Some(&fragment! { "color" => "#00FF00" }));
    assert_eq!(table.get("b__green"), Some(&fragment! { "borderColor" => "#00FF00" }));
    assert_eq!(table.get("bg_green"), Some(&fragment! { "backgroundColor" => "#00FF00" }));
    assert_eq!(
        table.get("bg_light_green"),
        Some(&fragment! { "backgroundColor" => "#00FF00" })
    );
}

#[test]
fn custom_styles_add_and_override() {
    let config = StyleConfig::from_yaml(
        r#"
        styles:
          custom:
            backgroundColor: blue
          b:
            fontWeight: bold
            color: red
        "#,
    )
    .unwrap();
    let table = build(&config);

    assert_eq!(table.get("custom"), Some(&fragment! { "backgroundColor" => "blue" }));
    assert_eq!(
        table.get("b"),
        Some(&fragment! { "fontWeight" => "bold", "color" => "red" })
    );
}

#[test]
fn shortcuts_expand_to_merged_fragments() {
    let config = StyleConfig::from_yaml(
        r##"
        styles:
          custom:
            backgroundColor: blue
        shortcuts:
          title: b red
          subtitle: b custom
          invert: "bg-black #fff"
        "##,
    )
    .unwrap();
    let table = build(&config);

    assert_eq!(
        table.get("title"),
        Some(&fragment! { "fontWeight" => "bold", "color" => "red" })
    );
    assert_eq!(
        table.get("subtitle"),
        Some(&fragment! { "fontWeight" => "bold", "backgroundColor" => "blue" })
    );
    assert_eq!(
        table.get("invert"),
        Some(&fragment! { "backgroundColor" => "black", "color" => "#fff" })
    );
}

#[test]
fn shortcut_with_unknown_token_fails_build() {
    let config = StyleConfig::from_yaml("shortcuts:\n  hero: f-headline w8\n").unwrap();
    let err = StyleTable::build(&config).unwrap_err();
    assert_eq!(
        err,
        BuildError::MissingShortcutReference {
            shortcut: "hero".into(),
            token: "w8".into(),
        }
    );
    assert_eq!(
        err.to_string(),
        "shortcut 'hero' references unknown style 'w8'"
    );
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn resolve_keeps_one_fragment_per_token() {
    let table = build(&StyleConfig::default());
    assert_eq!(
        table.resolve("w5 flx-i pa0").unwrap(),
        vec![
            fragment! { "width" => 256 },
            fragment! { "flex" => 1 },
            fragment! { "padding" => 0 },
        ]
    );
}

#[test]
fn resolve_dynamic_colors() {
    let table = build(&StyleConfig::default());
    assert_eq!(
        table
            .resolve("bg-#abcdef b--rgba(200,144,233,1.0) burlywood")
            .unwrap(),
        vec![
            fragment! { "backgroundColor" => "#abcdef" },
            fragment! { "borderColor" => "rgba(200,144,233,1.0)" },
            fragment! { "color" => "burlywood" },
        ]
    );
    assert_eq!(table.resolve("azure").unwrap(), vec![fragment! { "color" => "azure" }]);
}

#[test]
fn resolve_unknown_token() {
    let table = build(&StyleConfig::default());
    let err = table.resolve("w8").unwrap_err();
    assert_eq!(err, UnresolvedTokenError::new("w8"));
    assert_eq!(err.to_string(), "style 'w8' not found");
}

#[test]
fn rebuild_discards_previous_entries() {
    let config = StyleConfig::from_yaml("styles:\n  custom: { flex: 2 }\n").unwrap();
    assert!(build(&config).contains("custom"));
    assert!(!build(&StyleConfig::default()).contains("custom"));
}
