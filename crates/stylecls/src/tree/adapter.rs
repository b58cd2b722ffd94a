use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::fragment::StyleFragment;

/// A node's children: one child or a list.
///
/// A JSON array always deserializes as `Many`, and an element that fails to
/// deserialize fails the whole list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Children<C> {
    Many(Vec<C>),
    One(C),
}

impl<'de, C: DeserializeOwned> Deserialize<'de> for Children<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_array() {
            Vec::<C>::deserialize(value)
                .map(Children::Many)
                .map_err(D::Error::custom)
        } else {
            C::deserialize(value)
                .map(Children::One)
                .map_err(D::Error::custom)
        }
    }
}

impl<C> Children<C> {
    pub fn as_slice(&self) -> &[C] {
        match self {
            Children::Many(list) => list,
            Children::One(child) => std::slice::from_ref(child),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// A node's existing style: one fragment or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleProp {
    One(StyleFragment),
    Many(Vec<StyleFragment>),
}

impl StyleProp {
    /// The style as a list, a single fragment becoming a one-element list.
    pub fn to_list(&self) -> Vec<StyleFragment> {
        match self {
            StyleProp::One(fragment) => vec![fragment.clone()],
            StyleProp::Many(list) => list.clone(),
        }
    }
}

impl From<StyleFragment> for StyleProp {
    fn from(fragment: StyleFragment) -> Self {
        StyleProp::One(fragment)
    }
}

impl From<Vec<StyleFragment>> for StyleProp {
    fn from(list: Vec<StyleFragment>) -> Self {
        StyleProp::Many(list)
    }
}

/// Node capabilities the [`Rewriter`](super::Rewriter) needs from a tree type.
///
/// `Node` is a cheap handle (an `Arc`, an index, a borrowed id). Handles of
/// untouched subtrees are returned as-is, so whatever identity the handle
/// carries survives a rewrite.
pub trait TreeAdapter {
    type Node: Clone;
    type Child: Clone;

    /// Returns the node inside `child`, or `None` for leaves such as text.
    fn as_node<'a>(&self, child: &'a Self::Child) -> Option<&'a Self::Node>;

    /// Wraps a node as a child.
    fn into_child(&self, node: Self::Node) -> Self::Child;

    /// The node's class string, if it carries one.
    fn class_string<'a>(&self, node: &'a Self::Node) -> Option<&'a str>;

    fn style<'a>(&self, node: &'a Self::Node) -> Option<&'a StyleProp>;

    fn children<'a>(&self, node: &'a Self::Node) -> Option<&'a Children<Self::Child>>;

    /// Copies `node`, keeping its type, key and every other property.
    ///
    /// `style` and `children` replace the node's own values when present and
    /// leave them alone when `None`.
    fn clone_with(
        &self,
        node: &Self::Node,
        style: Option<Vec<StyleFragment>>,
        children: Option<Children<Self::Child>>,
    ) -> Self::Node;
}
