//! # stylecls - Utility-Class Style Compiler
//!
//! `stylecls` compiles a compact configuration into a table of atomic style
//! fragments, then resolves space-separated utility-class strings
//! (`"pa3 w5 bg-green"`) into ordered lists of those fragments. A tree
//! rewriter applies the same resolution across a node tree, attaching the
//! result to each node's style.
//!
//! ## Core Concepts
//!
//! - [`StyleConfig`]: scale parameters, palette, fonts, custom styles and shortcuts
//! - [`StyleTable`]: token -> [`StyleFragment`] plus token -> magnitude for scale tokens
//! - [`TableBuilder`]: compiles a config, optionally through a [`StyleSheetAdapter`]
//! - [`Resolver`]: class string -> fragment list, with ordered [`DynamicFamily`] fallbacks
//! - [`tree::Rewriter`]: identity-preserving rewrite of class strings across a tree
//! - [`context`]: a process-wide installed table
//!
//! ## Quick Start
//!
//! ```rust
//! use stylecls::{fragment, StyleConfig, StyleTable};
//!
//! let config = StyleConfig::from_yaml(r##"
//! colors:
//!   palette:
//!     green: "#00FF00"
//! shortcuts:
//!   title: b f1
//! "##).unwrap();
//!
//! let table = StyleTable::build(&config).unwrap();
//! let styles = table.resolve("title pa3 bg-green").unwrap();
//! assert_eq!(styles, vec![
//!     fragment! { "fontWeight" => "bold", "fontSize" => 48 },
//!     fragment! { "padding" => 16 },
//!     fragment! { "backgroundColor" => "#00FF00" },
//! ]);
//! ```
//!
//! ## Token Syntax
//!
//! Tokens may be written with hyphens or underscores: `flx-i` and `flx_i`
//! resolve identically. A token missing from the table may still resolve
//! dynamically:
//!
//! - `bg-<color>` sets `backgroundColor`
//! - `b--<color>` sets `borderColor`
//! - a CSS color name or a `#`/`rgb`/`hsl` literal sets `color`
//!
//! Anything else fails with [`UnresolvedTokenError`].

pub mod config;
pub mod context;
mod error;
mod fragment;
mod palette;
mod resolve;
pub mod scale;
mod table;
pub mod tree;

// Error types
pub use error::{BuildError, ConfigError, UnresolvedTokenError};

// Fragments
pub use fragment::{normalize_token, PropertyValue, StyleFragment};

// Configuration
pub use config::{ColorsConfig, ScaleConfig, StyleConfig, CONFIG_EXTENSIONS, DEFAULT_CLS_PROP};

// Table building
pub use palette::palette_tokens;
pub use scale::Progression;
pub use table::{IdentitySheet, StyleSheetAdapter, StyleTable, TableBuilder};

// Resolution
pub use resolve::{is_literal_color, DynamicFamily, Resolver};
