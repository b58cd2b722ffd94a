//! Token resolution.
//!
//! [`Resolver::resolve`] turns a class string into an ordered list of
//! fragments, one per token:
//!
//! 1. Hyphens are replaced by underscores
//! 2. The string is split on whitespace
//! 3. Each token is looked up in the [`StyleTable`]; on a miss the
//!    [`DynamicFamily`] list is tried in order
//! 4. A token nothing matches aborts the call with [`UnresolvedTokenError`]
//!
//! Fragments are never merged here. A shortcut token contributes its single
//! pre-merged fragment like any other table entry.
//!
//! ```rust
//! use stylecls::{fragment, StyleConfig, StyleTable};
//!
//! let table = StyleTable::build(&StyleConfig::default()).unwrap();
//! let styles = table
//!     .resolve("bg-#abcdef b--rgba(200,144,233,1.0) burlywood")
//!     .unwrap();
//!
//! assert_eq!(styles, vec![
//!     fragment! { "backgroundColor" => "#abcdef" },
//!     fragment! { "borderColor" => "rgba(200,144,233,1.0)" },
//!     fragment! { "color" => "burlywood" },
//! ]);
//! ```

use std::borrow::Cow;

use crate::error::UnresolvedTokenError;
use crate::fragment::{normalize_token, StyleFragment};
use crate::table::StyleTable;

/// A resolution rule matched by token shape instead of table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynamicFamily {
    /// `<prefix><rest>` resolves to `{property: rest}`.
    Prefix {
        prefix: Cow<'static, str>,
        property: Cow<'static, str>,
    },
    /// A CSS color name, or a token starting with `#`, `rgb` or `hsl`,
    /// resolves to `{color: token}`.
    LiteralColor,
}

impl DynamicFamily {
    /// `bg_<color>` sets `backgroundColor`.
    pub const BACKGROUND: DynamicFamily = DynamicFamily::Prefix {
        prefix: Cow::Borrowed("bg_"),
        property: Cow::Borrowed("backgroundColor"),
    };

    /// `b__<color>` sets `borderColor`.
    pub const BORDER: DynamicFamily = DynamicFamily::Prefix {
        prefix: Cow::Borrowed("b__"),
        property: Cow::Borrowed("borderColor"),
    };

    /// Creates a prefix family. The prefix is matched against normalized
    /// tokens, so it should be written with underscores.
    pub fn prefix(prefix: impl Into<Cow<'static, str>>, property: impl Into<Cow<'static, str>>) -> Self {
        DynamicFamily::Prefix {
            prefix: prefix.into(),
            property: property.into(),
        }
    }

    /// The built-in families, in priority order.
    pub fn defaults() -> Vec<DynamicFamily> {
        vec![Self::BACKGROUND, Self::BORDER, Self::LiteralColor]
    }

    /// Produces a fragment if `token` has this family's shape.
    pub fn apply(&self, token: &str) -> Option<StyleFragment> {
        match self {
            DynamicFamily::Prefix { prefix, property } => token
                .strip_prefix(prefix.as_ref())
                .map(|rest| StyleFragment::single(property.as_ref(), rest)),
            DynamicFamily::LiteralColor => {
                is_literal_color(token).then(|| StyleFragment::single("color", token))
            }
        }
    }
}

/// Color keywords that are not named colors.
const NON_NAMED_KEYWORDS: &[&str] = &["transparent", "currentcolor"];

/// True for lowercase CSS color names and for `#`/`rgb`/`hsl` literals.
pub fn is_literal_color(token: &str) -> bool {
    if token.starts_with('#') || token.starts_with("rgb") || token.starts_with("hsl") {
        return true;
    }
    !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_lowercase())
        && !NON_NAMED_KEYWORDS.contains(&token)
        && cssparser::parse_color_keyword::<cssparser::Color>(token).is_ok()
}

/// Resolves class strings against a [`StyleTable`].
///
/// The resolver only reads the table, so one table can back any number of
/// resolvers, on any number of threads.
#[derive(Debug, Clone)]
pub struct Resolver<'t> {
    table: &'t StyleTable,
    families: Vec<DynamicFamily>,
}

impl<'t> Resolver<'t> {
    /// Creates a resolver with the default dynamic families.
    pub fn new(table: &'t StyleTable) -> Self {
        Self {
            table,
            families: DynamicFamily::defaults(),
        }
    }

    /// Appends a dynamic family after the existing ones.
    pub fn with_family(mut self, family: DynamicFamily) -> Self {
        self.families.push(family);
        self
    }

    /// Replaces the dynamic families.
    pub fn with_families(mut self, families: Vec<DynamicFamily>) -> Self {
        self.families = families;
        self
    }

    pub fn families(&self) -> &[DynamicFamily] {
        &self.families
    }

    pub fn table(&self) -> &'t StyleTable {
        self.table
    }

    /// Resolves one already-normalized token.
    pub fn resolve_token(&self, token: &str) -> Option<StyleFragment> {
        if let Some(fragment) = self.table.get(token) {
            return Some(fragment.clone());
        }
        self.families.iter().find_map(|family| family.apply(token))
    }

    /// Resolves a class string into one fragment per token.
    ///
    /// # Errors
    ///
    /// Fails on the first token that nothing matches. No partial list is
    /// returned.
    pub fn resolve(&self, classes: &str) -> Result<Vec<StyleFragment>, UnresolvedTokenError> {
        let normalized = normalize_token(classes);
        normalized
            .split_whitespace()
            .map(|token| {
                self.resolve_token(token).ok_or_else(|| {
                    tracing::debug!(token, "unresolved style token");
                    UnresolvedTokenError::new(token)
                })
            })
            .collect()
    }
}
