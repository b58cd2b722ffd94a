//! Style fragments and token normalization.
//!
//! A [`StyleFragment`] is the unit everything else in this crate produces: a
//! flat mapping from a style property name (`"paddingLeft"`) to a primitive
//! [`PropertyValue`]. Fragments serialize as plain objects, so the same type
//! is used for configured custom styles and for the style data of tree nodes.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Replaces every hyphen with an underscore.
///
/// Only the hyphen is substituted, so payload characters such as `.`, `,`,
/// `(`, `)` and `#` inside dynamic tokens pass through untouched.
///
/// ```rust
/// use stylecls::normalize_token;
///
/// assert_eq!(normalize_token("flx-i"), "flx_i");
/// assert_eq!(normalize_token("b--rgba(1,2,3,0.5)"), "b__rgba(1,2,3,0.5)");
/// ```
pub fn normalize_token(token: &str) -> Cow<'_, str> {
    if token.contains('-') {
        Cow::Owned(token.replace('-', "_"))
    } else {
        Cow::Borrowed(token)
    }
}

/// A primitive style value: a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
}

impl PropertyValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            PropertyValue::Text(_) => None,
        }
    }

    /// Returns the string value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            PropertyValue::Number(_) => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        PropertyValue::Number(f64::from(n))
    }
}

impl From<u32> for PropertyValue {
    fn from(n: u32) -> Self {
        PropertyValue::Number(f64::from(n))
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

/// A flat property-name to value mapping produced by one token.
///
/// Properties are kept sorted by name, which makes fragments compare and
/// serialize deterministically.
///
/// ```rust
/// use stylecls::StyleFragment;
///
/// let fragment = StyleFragment::new()
///     .with("paddingLeft", 8)
///     .with("paddingRight", 8);
/// assert_eq!(fragment.len(), 2);
/// assert_eq!(fragment.get("paddingLeft").and_then(|v| v.as_number()), Some(8.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleFragment(BTreeMap<String, PropertyValue>);

impl StyleFragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fragment holding a single property.
    pub fn single(property: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self::new().with(property, value)
    }

    /// Sets a property, returning the fragment for chaining.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// Returns the value of a property.
    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.0.get(property)
    }

    /// Returns true if the property is set.
    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(property, value)` pairs in property-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copies every property of `other` into `self`; `other` wins on conflict.
    pub fn merge(&mut self, other: &StyleFragment) {
        for (property, value) in &other.0 {
            self.0.insert(property.clone(), value.clone());
        }
    }

    /// Merges fragments left to right into one, later properties winning.
    pub fn merge_all<'a, I>(fragments: I) -> StyleFragment
    where
        I: IntoIterator<Item = &'a StyleFragment>,
    {
        let mut merged = StyleFragment::new();
        for fragment in fragments {
            merged.merge(fragment);
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for StyleFragment
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Builds a [`StyleFragment`] from `property => value` pairs.
///
/// ```rust
/// use stylecls::fragment;
///
/// let f = fragment! { "width" => 32, "color" => "red" };
/// assert_eq!(f.len(), 2);
/// ```
#[macro_export]
macro_rules! fragment {
    ($($property:expr => $value:expr),* $(,)?) => {
        $crate::StyleFragment::new()$(.with($property, $value))*
    };
}
