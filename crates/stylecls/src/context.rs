//! Process-wide style context.
//!
//! Most applications build one table at startup and resolve against it
//! everywhere. This module keeps that table in a process-wide slot:
//!
//! ```rust
//! use stylecls::{context, fragment, StyleConfig};
//!
//! let mut config = StyleConfig::default();
//! config.shortcuts.insert("title".into(), "b red".into());
//! context::build(&config).unwrap();
//!
//! assert_eq!(
//!     context::resolve("title").unwrap(),
//!     vec![fragment! { "fontWeight" => "bold", "color" => "red" }]
//! );
//! ```
//!
//! Before the first [`build`], the slot holds the table for
//! `StyleConfig::default()`. Each build replaces the slot wholesale; readers
//! holding an earlier [`current`] snapshot keep seeing the old table.

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::config::{StyleConfig, DEFAULT_CLS_PROP};
use crate::error::{BuildError, UnresolvedTokenError};
use crate::fragment::StyleFragment;
use crate::table::{IdentitySheet, StyleSheetAdapter, StyleTable, TableBuilder};
use crate::tree::{Element, ElementAdapter, Rewriter};

struct Installed {
    table: Arc<StyleTable>,
    cls_prop: String,
}

static INSTALLED: Lazy<RwLock<Installed>> = Lazy::new(|| {
    RwLock::new(Installed {
        table: Arc::new(StyleTable::build(&StyleConfig::default()).unwrap_or_default()),
        cls_prop: DEFAULT_CLS_PROP.to_string(),
    })
});

/// Builds a table from `config` and installs it.
pub fn build(config: &StyleConfig) -> Result<Arc<StyleTable>, BuildError> {
    build_with(config, &IdentitySheet)
}

/// Builds a table through `adapter` and installs it.
///
/// On error the previously installed table stays in place.
pub fn build_with<A>(config: &StyleConfig, adapter: &A) -> Result<Arc<StyleTable>, BuildError>
where
    A: StyleSheetAdapter + ?Sized,
{
    let table = Arc::new(TableBuilder::new(config).build_with(adapter)?);
    let mut installed = INSTALLED.write().unwrap_or_else(PoisonError::into_inner);
    installed.table = Arc::clone(&table);
    installed.cls_prop = config.cls_prop_name.clone();
    tracing::debug!(
        styles = table.len(),
        cls_prop = %installed.cls_prop,
        "installed style table"
    );
    Ok(table)
}

/// The installed table.
pub fn current() -> Arc<StyleTable> {
    let installed = INSTALLED.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&installed.table)
}

/// Resolves a class string against the installed table.
pub fn resolve(classes: &str) -> Result<Vec<StyleFragment>, UnresolvedTokenError> {
    current().resolve(classes)
}

/// Rewrites an [`Element`] tree against the installed table, reading class
/// strings from the installed config's `clsPropName`.
pub fn rewrite(node: &Arc<Element>) -> Result<Arc<Element>, UnresolvedTokenError> {
    let (table, cls_prop) = {
        let installed = INSTALLED.read().unwrap_or_else(PoisonError::into_inner);
        (Arc::clone(&installed.table), installed.cls_prop.clone())
    };
    Rewriter::new(&table, ElementAdapter::new(cls_prop)).rewrite(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_build_installs_table() {
        let mut config = StyleConfig::default();
        config.fonts.insert("iowan".into(), "Iowan Old Style".into());
        let table = build(&config).unwrap();
        assert!(Arc::ptr_eq(&table, &current()));
        assert_eq!(
            resolve("ff-iowan").unwrap(),
            vec![fragment! { "fontFamily" => "Iowan Old Style" }]
        );

        build(&StyleConfig::default()).unwrap();
        assert!(resolve("ff-iowan").is_err());
    }

    #[test]
    #[serial]
    fn test_failed_build_keeps_previous_table() {
        let before = build(&StyleConfig::default()).unwrap();
        let mut config = StyleConfig::default();
        config.shortcuts.insert("broken".into(), "nope".into());
        assert!(build(&config).is_err());
        assert!(Arc::ptr_eq(&before, &current()));
    }

    #[test]
    #[serial]
    fn test_snapshot_survives_rebuild() {
        let mut config = StyleConfig::default();
        config.styles.insert("card".into(), fragment! { "padding" => 3 });
        build(&config).unwrap();
        let snapshot = current();

        build(&StyleConfig::default()).unwrap();
        assert!(snapshot.contains("card"));
        assert!(!current().contains("card"));
    }

    #[test]
    #[serial]
    fn test_rewrite_uses_installed_cls_prop() {
        let config = StyleConfig {
            cls_prop_name: "className".into(),
            ..StyleConfig::default()
        };
        build(&config).unwrap();

        let node = Arc::new(Element::new("view").prop("className", "flx-i").cls("w8"));
        let out = rewrite(&node).unwrap();
        assert_eq!(out.style_list(), Some(vec![fragment! { "flex" => 1 }]));

        build(&StyleConfig::default()).unwrap();
        assert!(rewrite(&node).is_err());
    }

    #[test]
    #[serial]
    fn test_build_with_adapter() {
        let only_bold = |mut sheet: std::collections::HashMap<String, StyleFragment>| {
            sheet.retain(|token, _| token == "b");
            sheet
        };
        let table = build_with(&StyleConfig::default(), &only_bold).unwrap();
        assert_eq!(table.len(), 1);
        assert!(resolve("pa3").is_err());
        build(&StyleConfig::default()).unwrap();
    }
}
