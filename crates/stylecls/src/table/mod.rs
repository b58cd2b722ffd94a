//! The compiled style table.
//!
//! A [`StyleTable`] pairs two lookups produced by one build:
//!
//! - the **style table**, mapping every token to its [`StyleFragment`]
//! - the **sizes table**, mapping scale-generated tokens to their raw magnitude
//!
//! Tables are immutable values once built. Rebuilding produces a new table;
//! nothing is carried over from a previous build.
//!
//! ```rust
//! use stylecls::{fragment, StyleConfig, StyleTable};
//!
//! let table = StyleTable::build(&StyleConfig::default()).unwrap();
//! assert_eq!(table.get("pa3"), Some(&fragment! { "padding" => 16 }));
//! assert_eq!(table.size("max_w2"), Some(32.0));
//! ```

mod builder;

pub use builder::{IdentitySheet, StyleSheetAdapter, TableBuilder};

use std::collections::HashMap;

use crate::config::StyleConfig;
use crate::error::{BuildError, UnresolvedTokenError};
use crate::fragment::{normalize_token, StyleFragment};
use crate::resolve::Resolver;

/// Token lookup tables compiled from a [`StyleConfig`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    styles: HashMap<String, StyleFragment>,
    sizes: HashMap<String, f64>,
}

impl StyleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from configuration with the identity style-sheet adapter.
    pub fn build(config: &StyleConfig) -> Result<Self, BuildError> {
        TableBuilder::new(config).build()
    }

    /// Returns the fragment registered under `token`, without normalization.
    pub fn get(&self, token: &str) -> Option<&StyleFragment> {
        self.styles.get(token)
    }

    /// Returns the magnitude of a scale-generated token.
    pub fn size(&self, token: &str) -> Option<f64> {
        self.sizes.get(token).copied()
    }

    /// Returns true if `token` has a style entry.
    pub fn contains(&self, token: &str) -> bool {
        self.styles.contains_key(token)
    }

    /// Number of style entries.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// All style entries, in no particular order.
    pub fn styles(&self) -> &HashMap<String, StyleFragment> {
        &self.styles
    }

    /// All sizes entries, in no particular order.
    pub fn sizes(&self) -> &HashMap<String, f64> {
        &self.sizes
    }

    /// Resolves a class string against this table with the default families.
    ///
    /// Shorthand for `Resolver::new(self).resolve(classes)`.
    pub fn resolve(&self, classes: &str) -> Result<Vec<StyleFragment>, UnresolvedTokenError> {
        Resolver::new(self).resolve(classes)
    }

    /// Inserts an entry, replacing any previous fragment for the key.
    pub(crate) fn insert(&mut self, token: impl Into<String>, fragment: StyleFragment) {
        self.styles.insert(token.into(), fragment);
    }

    /// Inserts an entry that also carries a magnitude.
    pub(crate) fn insert_sized(&mut self, token: impl Into<String>, fragment: StyleFragment, size: f64) {
        let token = token.into();
        self.sizes.insert(token.clone(), size);
        self.styles.insert(token, fragment);
    }

    /// Inserts an entry under its key and, for hyphenated keys, its normalized twin.
    pub(crate) fn register(&mut self, token: &str, fragment: StyleFragment) {
        let normalized = normalize_token(token);
        if normalized != token {
            self.styles
                .insert(normalized.into_owned(), fragment.clone());
        }
        self.styles.insert(token.to_string(), fragment);
    }

    /// Copies every hyphenated entry to its underscore form.
    ///
    /// Sizes follow their style entry. Running the pass again is a no-op.
    pub fn normalize_aliases(&mut self) -> usize {
        let hyphenated: Vec<String> = self
            .styles
            .keys()
            .filter(|k| k.contains('-'))
            .cloned()
            .collect();

        let mut added = 0;
        for key in hyphenated {
            let normalized = normalize_token(&key).into_owned();
            if let Some(fragment) = self.styles.get(&key).cloned() {
                if self.styles.insert(normalized.clone(), fragment).is_none() {
                    added += 1;
                }
            }
            if let Some(size) = self.sizes.get(&key).copied() {
                self.sizes.insert(normalized, size);
            }
        }
        added
    }

    pub(crate) fn into_parts(self) -> (HashMap<String, StyleFragment>, HashMap<String, f64>) {
        (self.styles, self.sizes)
    }

    pub(crate) fn from_parts(
        styles: HashMap<String, StyleFragment>,
        sizes: HashMap<String, f64>,
    ) -> Self {
        Self { styles, sizes }
    }
}
