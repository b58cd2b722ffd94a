//! Tree rewriting.
//!
//! A [`Rewriter`] walks a node tree and converts every class string it finds
//! into resolved style fragments, appended after whatever style the node
//! already carried. The walk is pure: it never mutates its input, and every
//! subtree that needed no change comes back as the very same handle.
//!
//! The rewriter is generic over [`TreeAdapter`], which exposes the handful of
//! node capabilities it needs. [`Element`] with [`ElementAdapter`] is the
//! bundled tree type, serializable as
//!
//! ```json
//! { "type": "view", "key": "1", "props": { "cls": "w5", "children": [ ... ] } }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use stylecls::tree::{Element, ElementAdapter, Rewriter};
//! use stylecls::{fragment, StyleConfig, StyleTable};
//!
//! let table = StyleTable::build(&StyleConfig::default()).unwrap();
//! let rewriter = Rewriter::new(&table, ElementAdapter::default());
//!
//! let untouched = Arc::new(Element::new("text"));
//! let root = Arc::new(Element::new("view").cls("w5").child(untouched.clone()));
//!
//! let out = rewriter.rewrite(&root).unwrap();
//! assert_eq!(out.style_list(), Some(vec![fragment! { "width" => 256 }]));
//! assert!(Arc::ptr_eq(out.child_nodes()[0], &untouched));
//! ```

mod adapter;
mod element;
mod rewrite;

pub use adapter::{Children, StyleProp, TreeAdapter};
pub use element::{Child, Element, ElementAdapter, Props};
pub use rewrite::Rewriter;
