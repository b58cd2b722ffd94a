//! The bundled node type.

use std::sync::Arc;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::config::{StyleConfig, DEFAULT_CLS_PROP};
use crate::fragment::StyleFragment;

use super::adapter::{Children, StyleProp, TreeAdapter};

/// A tree node: a type tag, an optional key and a property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Value>,
    #[serde(default)]
    pub props: Props,
}

/// Node properties. The class string lives in `other` under the configured name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Props {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleProp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Children<Child>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// A child slot: a nested element or an opaque leaf value such as text.
///
/// Any object with a `type` key is an element. One that does not
/// deserialize as [`Element`] is an error, never a leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Child {
    Element(Arc<Element>),
    Leaf(Value),
}

impl<'de> Deserialize<'de> for Child {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let is_element = value
            .as_object()
            .is_some_and(|object| object.contains_key("type"));
        if !is_element {
            return Ok(Child::Leaf(value));
        }
        Element::deserialize(value)
            .map(|element| Child::Element(Arc::new(element)))
            .map_err(D::Error::custom)
    }
}

impl From<Arc<Element>> for Child {
    fn from(element: Arc<Element>) -> Self {
        Child::Element(element)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Child::Element(Arc::new(element))
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Leaf(Value::String(text.to_string()))
    }
}

impl Element {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            key: None,
            props: Props::default(),
        }
    }

    pub fn key(mut self, key: impl Into<Value>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets an arbitrary property.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.other.insert(name.into(), value.into());
        self
    }

    /// Sets the class string under the default `cls` property.
    pub fn cls(self, classes: &str) -> Self {
        self.prop(DEFAULT_CLS_PROP, classes)
    }

    pub fn with_style(mut self, style: impl Into<StyleProp>) -> Self {
        self.props.style = Some(style.into());
        self
    }

    /// Appends a child. The first child is stored alone; a second turns the
    /// slot into a list.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        let child = child.into();
        self.props.children = Some(match self.props.children.take() {
            None => Children::One(child),
            Some(Children::One(first)) => Children::Many(vec![first, child]),
            Some(Children::Many(mut list)) => {
                list.push(child);
                Children::Many(list)
            }
        });
        self
    }

    /// Sets the children as a list, even for a single child.
    pub fn children(mut self, children: Vec<Child>) -> Self {
        self.props.children = Some(Children::Many(children));
        self
    }

    /// The class string stored under `prop`, if it is a string.
    pub fn class_string(&self, prop: &str) -> Option<&str> {
        self.props.other.get(prop).and_then(Value::as_str)
    }

    /// The style as a list of fragments.
    pub fn style_list(&self) -> Option<Vec<StyleFragment>> {
        self.props.style.as_ref().map(StyleProp::to_list)
    }

    /// Element children in order, skipping leaves.
    pub fn child_nodes(&self) -> Vec<&Arc<Element>> {
        self.child_slots()
            .iter()
            .filter_map(|child| match child {
                Child::Element(element) => Some(element),
                Child::Leaf(_) => None,
            })
            .collect()
    }

    /// Every child slot, leaves included.
    pub fn child_slots(&self) -> &[Child] {
        self.props
            .children
            .as_ref()
            .map(Children::as_slice)
            .unwrap_or_default()
    }
}

/// [`TreeAdapter`] for [`Element`] trees, reading class strings from a named property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementAdapter {
    cls_prop: String,
}

impl Default for ElementAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_CLS_PROP)
    }
}

impl ElementAdapter {
    pub fn new(cls_prop: impl Into<String>) -> Self {
        Self {
            cls_prop: cls_prop.into(),
        }
    }

    /// Uses the config's `clsPropName`.
    pub fn from_config(config: &StyleConfig) -> Self {
        Self::new(config.cls_prop_name.as_str())
    }

    pub fn cls_prop(&self) -> &str {
        &self.cls_prop
    }
}

impl TreeAdapter for ElementAdapter {
    type Node = Arc<Element>;
    type Child = Child;

    fn as_node<'a>(&self, child: &'a Child) -> Option<&'a Arc<Element>> {
        match child {
            Child::Element(element) => Some(element),
            Child::Leaf(_) => None,
        }
    }

    fn into_child(&self, node: Arc<Element>) -> Child {
        Child::Element(node)
    }

    fn class_string<'a>(&self, node: &'a Arc<Element>) -> Option<&'a str> {
        node.class_string(&self.cls_prop)
    }

    fn style<'a>(&self, node: &'a Arc<Element>) -> Option<&'a StyleProp> {
        node.props.style.as_ref()
    }

    fn children<'a>(&self, node: &'a Arc<Element>) -> Option<&'a Children<Child>> {
        node.props.children.as_ref()
    }

    fn clone_with(
        &self,
        node: &Arc<Element>,
        style: Option<Vec<StyleFragment>>,
        children: Option<Children<Child>>,
    ) -> Arc<Element> {
        Arc::new(Element {
            kind: node.kind.clone(),
            key: node.key.clone(),
            props: Props {
                style: style
                    .map(StyleProp::Many)
                    .or_else(|| node.props.style.clone()),
                children: children.or_else(|| node.props.children.clone()),
                other: node.props.other.clone(),
            },
        })
    }
}
