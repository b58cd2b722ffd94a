//! Style table builder.
//!
//! The builder compiles a [`StyleConfig`] in a fixed sequence of passes, each
//! of which may read what the earlier passes registered:
//!
//! 1. **Scales**: generated and fixed families ([`crate::scale`])
//! 2. **Alias normalization**: underscore twins for hyphenated keys
//! 3. **Fonts**: `ff_<alias>`
//! 4. **Palette**: `<name>`, `bg_<name>`, `b__<name>`
//! 5. **Custom styles**: configured fragments, replacing same-named entries
//! 6. **Shortcuts**: token strings merged into one fragment each
//! 7. **Style sheet**: the [`StyleSheetAdapter`] transforms the finished map
//!
//! Shortcuts resolve against the table as it stands after pass 5. A shortcut
//! body that names another shortcut fails the build like any other unknown
//! token.

use std::collections::HashMap;

use crate::config::StyleConfig;
use crate::error::BuildError;
use crate::fragment::StyleFragment;
use crate::palette;
use crate::resolve::Resolver;
use crate::scale;

use super::StyleTable;

/// Transforms the raw style map into the platform's native form before it is stored.
///
/// This is the seam for platform style-sheet registration. The identity
/// transform ([`IdentitySheet`]) is a valid adapter, and any closure with the
/// right signature is one too:
///
/// ```rust
/// use std::collections::HashMap;
/// use stylecls::{StyleConfig, StyleFragment, TableBuilder};
///
/// let drop_margins = |mut sheet: HashMap<String, StyleFragment>| {
///     sheet.retain(|token, _| !token.starts_with('m'));
///     sheet
/// };
///
/// let config = StyleConfig::default();
/// let table = TableBuilder::new(&config).build_with(&drop_margins).unwrap();
/// assert!(!table.contains("ma3"));
/// assert!(table.contains("pa3"));
/// ```
pub trait StyleSheetAdapter {
    fn create(&self, sheet: HashMap<String, StyleFragment>) -> HashMap<String, StyleFragment>;
}

/// Stores fragments unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentitySheet;

impl StyleSheetAdapter for IdentitySheet {
    fn create(&self, sheet: HashMap<String, StyleFragment>) -> HashMap<String, StyleFragment> {
        sheet
    }
}

impl<F> StyleSheetAdapter for F
where
    F: Fn(HashMap<String, StyleFragment>) -> HashMap<String, StyleFragment>,
{
    fn create(&self, sheet: HashMap<String, StyleFragment>) -> HashMap<String, StyleFragment> {
        self(sheet)
    }
}

/// Compiles a [`StyleConfig`] into a fresh [`StyleTable`].
#[derive(Debug)]
pub struct TableBuilder<'c> {
    config: &'c StyleConfig,
    table: StyleTable,
}

impl<'c> TableBuilder<'c> {
    pub fn new(config: &'c StyleConfig) -> Self {
        Self {
            config,
            table: StyleTable::new(),
        }
    }

    /// Runs every pass with the identity style-sheet adapter.
    pub fn build(self) -> Result<StyleTable, BuildError> {
        self.build_with(&IdentitySheet)
    }

    /// Runs every pass, handing the finished style map to `adapter`.
    pub fn build_with<A>(mut self, adapter: &A) -> Result<StyleTable, BuildError>
    where
        A: StyleSheetAdapter + ?Sized,
    {
        scale::register_scales(&mut self.table, &self.config.sizes)?;
        tracing::debug!(entries = self.table.len(), "registered scale families");

        let added = self.table.normalize_aliases();
        tracing::debug!(added, "normalized hyphenated aliases");

        palette::register_fonts(&mut self.table, &self.config.fonts);
        palette::register_palette(&mut self.table, &self.config.colors.palette);
        tracing::debug!(
            fonts = self.config.fonts.len(),
            colors = self.config.colors.palette.len(),
            "registered fonts and palette"
        );

        self.register_custom_styles();
        self.register_shortcuts()?;

        let (styles, sizes) = self.table.into_parts();
        let table = StyleTable::from_parts(adapter.create(styles), sizes);
        tracing::debug!(styles = table.len(), sizes = table.sizes().len(), "built style table");
        Ok(table)
    }

    fn register_custom_styles(&mut self) {
        let config = self.config;
        for (name, fragment) in &config.styles {
            self.table.register(name, fragment.clone());
        }
    }

    fn register_shortcuts(&mut self) -> Result<(), BuildError> {
        let config = self.config;
        let expanded = {
            let resolver = Resolver::new(&self.table);
            config
                .shortcuts
                .iter()
                .map(|(name, body)| -> Result<_, BuildError> {
                    let fragments = resolver.resolve(body).map_err(|e| {
                        BuildError::MissingShortcutReference {
                            shortcut: name.clone(),
                            token: e.token,
                        }
                    })?;
                    Ok((name, StyleFragment::merge_all(&fragments)))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        for (name, fragment) in expanded {
            self.table.register(name, fragment);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment;

    fn build(config: &StyleConfig) -> StyleTable {
        TableBuilder::new(config).build().unwrap()
    }

    #[test]
    fn test_default_build_has_builtin_tokens() {
        let table = build(&StyleConfig::default());
        for token in ["w1", "w5", "pb7", "f1", "absolute_fill", "flx_i", "br__top", "o_025"] {
            assert!(table.contains(token), "missing {}", token);
        }
    }

    #[test]
    fn test_every_hyphenated_key_has_twin() {
        let mut config = StyleConfig::default();
        config.styles.insert("my-card".into(), fragment! { "padding" => 3 });
        config.shortcuts.insert("my-title".into(), "b f1".into());
        let table = build(&config);

        for (key, fragment) in table.styles() {
            if key.contains('-') {
                let twin = key.replace('-', "_");
                assert_eq!(table.get(&twin), Some(fragment), "twin of {}", key);
            }
        }
    }

    #[test]
    fn test_custom_styles_override_builtins() {
        let mut config = StyleConfig::default();
        config
            .styles
            .insert("b".into(), fragment! { "fontWeight" => "bold", "color" => "red" });
        let table = build(&config);
        assert_eq!(
            table.get("b"),
            Some(&fragment! { "fontWeight" => "bold", "color" => "red" })
        );
    }

    #[test]
    fn test_custom_styles_override_palette() {
        let mut config = StyleConfig::default();
        config.colors.palette.insert("brand".into(), "#111".into());
        config.styles.insert("bg_brand".into(), fragment! { "backgroundColor" => "#222" });
        let table = build(&config);
        assert_eq!(
            table.get("bg_brand"),
            Some(&fragment! { "backgroundColor" => "#222" })
        );
        assert_eq!(table.get("brand"), Some(&fragment! { "color" => "#111" }));
    }

    #[test]
    fn test_shortcut_merges_later_over_earlier() {
        let mut config = StyleConfig::default();
        config.styles.insert("blue".into(), fragment! { "color" => "blue" });
        config.shortcuts.insert("title".into(), "b blue red".into());
        let table = build(&config);
        assert_eq!(
            table.get("title"),
            Some(&fragment! { "fontWeight" => "bold", "color" => "red" })
        );
    }

    #[test]
    fn test_shortcut_uses_palette_tokens() {
        let mut config = StyleConfig::default();
        config.colors.palette.insert("light_green".into(), "#0f0".into());
        config.shortcuts.insert("badge".into(), "bg-light-green pa2".into());
        let table = build(&config);
        assert_eq!(
            table.get("badge"),
            Some(&fragment! { "backgroundColor" => "#0f0", "padding" => 8 })
        );
    }

    #[test]
    fn test_shortcut_is_not_sized() {
        let mut config = StyleConfig::default();
        config.shortcuts.insert("box".into(), "pa3".into());
        let table = build(&config);
        assert_eq!(table.size("box"), None);
    }

    #[test]
    fn test_shortcut_with_unknown_token_fails() {
        let mut config = StyleConfig::default();
        config.shortcuts.insert("broken".into(), "b w8".into());
        let err = TableBuilder::new(&config).build().unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingShortcutReference {
                shortcut: "broken".into(),
                token: "w8".into(),
            }
        );
    }

    #[test]
    fn test_shortcut_cannot_reference_shortcut() {
        let mut config = StyleConfig::default();
        config.shortcuts.insert("a-title".into(), "b".into());
        config.shortcuts.insert("z-heading".into(), "a-title f1".into());
        let err = TableBuilder::new(&config).build().unwrap_err();
        assert!(matches!(
            err,
            BuildError::MissingShortcutReference { ref shortcut, ref token }
                if shortcut == "z-heading" && token == "a_title"
        ));
    }

    #[test]
    fn test_adapter_sees_finished_table() {
        let mut config = StyleConfig::default();
        config.shortcuts.insert("title".into(), "b".into());
        let count = std::cell::Cell::new(0);
        let counting = |sheet: HashMap<String, StyleFragment>| {
            count.set(sheet.len());
            assert!(sheet.contains_key("title"));
            sheet
        };
        let table = TableBuilder::new(&config).build_with(&counting).unwrap();
        assert_eq!(count.get(), table.len());
    }

    #[test]
    fn test_adapter_leaves_sizes_alone() {
        let emptying = |_: HashMap<String, StyleFragment>| HashMap::new();
        let table = TableBuilder::new(&StyleConfig::default())
            .build_with(&emptying)
            .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.size("pa3"), Some(16.0));
    }

    #[test]
    fn test_rebuild_starts_from_scratch() {
        let mut config = StyleConfig::default();
        config.fonts.insert("iowan".into(), "Iowan Old Style".into());
        assert!(build(&config).contains("ff_iowan"));
        assert!(!build(&StyleConfig::default()).contains("ff_iowan"));
    }
}
