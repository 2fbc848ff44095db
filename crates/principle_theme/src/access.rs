//! Bounds-safe theme accessors
//!
//! Every lookup here is total: a missing index or key degrades to a fixed
//! default instead of failing. Renderers should read theme values through
//! these functions so fallbacks stay consistent.

use crate::style::{StyleObject, StyleValue};
use crate::theme::Theme;
use crate::tokens::{ColorToken, BODY_FONT_SIZE_INDEX};

/// Shadow returned for out-of-range shadow indices
pub const NO_SHADOW: &str = "none";

fn at<T>(scale: &[T], index: isize) -> Option<&T> {
    usize::try_from(index).ok().and_then(|i| scale.get(i))
}

/// The palette value for `key`, or `key` itself when the palette has no such
/// entry. Lets callers mix theme keys and raw CSS colors freely.
pub fn color<'a>(theme: &'a Theme, key: &'a str) -> &'a str {
    theme.colors.get_by_name(key).unwrap_or(key)
}

/// `space[index]`, or `0`.
pub fn space(theme: &Theme, index: isize) -> f32 {
    at(&theme.space, index).copied().unwrap_or(0.0)
}

/// `radii[index]`, or `0`.
pub fn radius(theme: &Theme, index: isize) -> f32 {
    at(&theme.radii, index).copied().unwrap_or(0.0)
}

/// `z_indices[index]`, or `0`.
pub fn z_index(theme: &Theme, index: isize) -> i32 {
    at(&theme.z_indices, index).copied().unwrap_or(0)
}

/// `font_sizes[index]`, falling back to the body size (`font_sizes[2]`).
///
/// A zero entry also falls back. Returns `0` only when the scale has no body
/// size either.
pub fn font_size(theme: &Theme, index: isize) -> f32 {
    at(&theme.font_sizes, index)
        .copied()
        .filter(|size| *size != 0.0)
        .or_else(|| theme.font_sizes.get(BODY_FONT_SIZE_INDEX).copied())
        .unwrap_or(0.0)
}

/// `shadows[index]`, or `"none"`. An empty entry also yields `"none"`.
pub fn shadow(theme: &Theme, index: isize) -> &str {
    at(&theme.shadows, index)
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_SHADOW)
}

/// A breakpoint-keyed style fragment built by [`responsive`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Responsive {
    /// Value applied without a media query
    pub base: Option<StyleValue>,
    /// `(media query, value)` pairs in ascending breakpoint order
    pub queries: Vec<(String, StyleValue)>,
}

impl Responsive {
    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.queries.is_empty()
    }

    /// The fragment as a style record: the base value under `property`, each
    /// media query holding `{ property: value }`.
    pub fn to_style(&self, property: &str) -> StyleObject {
        let mut style = StyleObject::new();
        if let Some(base) = &self.base {
            style.insert(property.to_string(), base.clone());
        }
        for (query, value) in &self.queries {
            let mut inner = StyleObject::new();
            inner.insert(property.to_string(), value.clone());
            style.insert(query.clone(), StyleValue::Map(inner));
        }
        style
    }
}

/// Spread `values` across breakpoints.
///
/// `values[0]` is the base value. Every later `values[i]` is keyed by a
/// `min-width` query whose threshold is the *previous* element, `values[i - 1]`.
pub fn responsive(values: &[StyleValue]) -> Responsive {
    let Some((first, _)) = values.split_first() else {
        return Responsive::default();
    };

    let queries = values
        .windows(2)
        .map(|pair| {
            (
                format!("@media screen and (min-width: {})", pair[0]),
                pair[1].clone(),
            )
        })
        .collect();

    Responsive {
        base: Some(first.clone()),
        queries,
    }
}

fn resolve_value(theme: &Theme, value: &StyleValue) -> StyleValue {
    match value {
        StyleValue::Str(s) => {
            let resolved = ColorToken::parse(s).and_then(|token| theme.colors.get(token));
            match resolved {
                Some(color) => StyleValue::Str(color.to_string()),
                None => value.clone(),
            }
        }
        StyleValue::Num(_) => value.clone(),
        StyleValue::List(items) => {
            StyleValue::List(items.iter().map(|v| resolve_value(theme, v)).collect())
        }
        StyleValue::Map(map) => StyleValue::Map(apply_theme_keys(theme, map)),
    }
}

/// Replace every string in `style` that names a palette entry with that
/// entry's color, recursing through sequences and nested records.
pub fn apply_theme_keys(theme: &Theme, style: &StyleObject) -> StyleObject {
    style
        .iter()
        .map(|(key, value)| (key.clone(), resolve_value(theme, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;
    use pretty_assertions::assert_eq;

    fn theme() -> Theme {
        let mut theme = Theme {
            space: vec![0.0, 4.0, 8.0],
            font_sizes: vec![12.0, 14.0, 16.0, 18.0],
            radii: vec![0.0, 2.0],
            shadows: vec!["none".into(), "0 1px 2px black".into(), String::new()],
            z_indices: vec![0, 1, 10],
            ..Theme::default()
        };
        theme.colors.set(ColorToken::Primary, "#66b3ff");
        theme.colors.set(ColorToken::Secondary, "#80c4ff");
        theme
    }

    #[test]
    fn color_falls_back_to_the_key() {
        let t = theme();
        assert_eq!(color(&t, "primary"), "#66b3ff");
        assert_eq!(color(&t, "tomato"), "tomato");
        assert_eq!(color(&t, "highlightBg"), "highlightBg");
    }

    #[test]
    fn numeric_scales_default_to_zero() {
        let t = theme();
        assert_eq!(space(&t, 2), 8.0);
        assert_eq!(space(&t, 3), 0.0);
        assert_eq!(space(&t, -1), 0.0);
        assert_eq!(radius(&t, 1), 2.0);
        assert_eq!(radius(&t, 9), 0.0);
        assert_eq!(z_index(&t, 2), 10);
        assert_eq!(z_index(&t, -4), 0);
    }

    #[test]
    fn font_size_falls_back_to_body() {
        let t = theme();
        assert_eq!(font_size(&t, 3), 18.0);
        assert_eq!(font_size(&t, 999), 16.0);
        assert_eq!(font_size(&t, -1), 16.0);
        assert_eq!(font_size(&Theme::default(), 0), 0.0);
    }

    #[test]
    fn shadow_defaults_to_none() {
        let t = theme();
        assert_eq!(shadow(&t, 1), "0 1px 2px black");
        assert_eq!(shadow(&t, 2), "none");
        assert_eq!(shadow(&t, -1), "none");
        assert_eq!(shadow(&t, 999), "none");
    }

    #[test]
    fn responsive_keys_queries_by_previous_value() {
        let fragment = responsive(&["640px".into(), "768px".into(), "1024px".into()]);
        assert_eq!(fragment.base, Some(StyleValue::from("640px")));
        assert_eq!(
            fragment.queries,
            vec![
                (
                    "@media screen and (min-width: 640px)".to_string(),
                    StyleValue::from("768px")
                ),
                (
                    "@media screen and (min-width: 768px)".to_string(),
                    StyleValue::from("1024px")
                ),
            ]
        );
        assert!(responsive(&[]).is_empty());

        let single = responsive(&["640px".into()]);
        assert_eq!(single.base, Some(StyleValue::from("640px")));
        assert!(single.queries.is_empty());
    }

    #[test]
    fn responsive_formats_numbers_plainly() {
        let fragment = responsive(&[StyleValue::from(4), StyleValue::from(8)]);
        let style = fragment.to_style("padding");
        assert_eq!(style.get("padding"), Some(&StyleValue::Num(4.0)));
        assert_eq!(
            style.get("@media screen and (min-width: 4)"),
            Some(&StyleValue::Map(style! { "padding" => 8 }))
        );
    }

    #[test]
    fn apply_theme_keys_walks_the_whole_tree() {
        let t = theme();
        let input = style! {
            "color" => "primary",
            "bg" => "transparent",
            "borderWidth" => 1,
            "borderColor" => vec![StyleValue::from("secondary"), "red".into()],
            "&:hover" => style! { "bg" => "secondary", "color" => "highlightBg" },
        };

        let expected = style! {
            "color" => "#66b3ff",
            "bg" => "transparent",
            "borderWidth" => 1,
            "borderColor" => vec![StyleValue::from("#80c4ff"), "red".into()],
            "&:hover" => style! { "bg" => "#80c4ff", "color" => "highlightBg" },
        };
        assert_eq!(apply_theme_keys(&t, &input), expected);
    }
}
