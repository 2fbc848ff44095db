//! Style values for component variants and theme-aware style objects
//!
//! A style object is a tree: leaves are strings or numbers, inner nodes are
//! sequences (responsive arrays) or nested records (pseudo states such as
//! `&:hover`, media queries, child selectors).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single style attribute value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Str(String),
    Num(f64),
    List(Vec<StyleValue>),
    Map(StyleObject),
}

/// Ordered style record; insertion order is preserved.
pub type StyleObject = IndexMap<String, StyleValue>;

/// Named variants of one component kind (`buttons.primary`, `cards.secondary`, ...).
pub type Variants = IndexMap<String, StyleObject>;

impl StyleValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            StyleValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&StyleObject> {
        match self {
            StyleValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Str(s) => f.write_str(s),
            StyleValue::Num(n) => write!(f, "{n}"),
            StyleValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            StyleValue::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Num(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Num(value as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Num(value as f64)
    }
}

impl From<Vec<StyleValue>> for StyleValue {
    fn from(value: Vec<StyleValue>) -> Self {
        StyleValue::List(value)
    }
}

impl From<StyleObject> for StyleValue {
    fn from(value: StyleObject) -> Self {
        StyleValue::Map(value)
    }
}

/// Interaction states a variant may carry a nested record for
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PseudoState {
    Hover,
    Active,
    Focus,
    Disabled,
}

impl PseudoState {
    /// Selector key the nested record is stored under
    pub fn selector(self) -> &'static str {
        match self {
            PseudoState::Hover => "&:hover",
            PseudoState::Active => "&:active",
            PseudoState::Focus => "&:focus",
            PseudoState::Disabled => "&:disabled",
        }
    }
}

/// The nested record for `state`, if the variant defines one.
pub fn pseudo_state(style: &StyleObject, state: PseudoState) -> Option<&StyleObject> {
    style.get(state.selector()).and_then(StyleValue::as_map)
}

/// Build a [`StyleObject`] from `key => value` pairs.
///
/// Examples:
/// - `style! { "color" => "primary", "padding" => 8 }`
/// - `style! { "bg" => "primary", "&:hover" => style! { "bg" => "secondary" } }`
#[macro_export]
macro_rules! style {
    () => {
        $crate::StyleObject::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut s = $crate::StyleObject::new();
        $(
            s.insert(::std::string::String::from($key), $crate::StyleValue::from($value));
        )+
        s
    }};
}
