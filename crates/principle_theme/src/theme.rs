//! Theme schema
//!
//! A [`Theme`] is plain data: scales, semantic maps and component variants.
//! It is treated as immutable; every composition or scaling helper returns a
//! new instance.

use crate::style::Variants;
use crate::tokens::*;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named partial palettes keyed by mode name (`light`, `dark`, ...).
pub type Modes = IndexMap<String, ColorOverrides>;

fn default_font_scale() -> f32 {
    1.0
}

fn is_unit_scale(scale: &f32) -> bool {
    *scale == 1.0
}

/// A complete theme
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Spacing scale; index 0 is no space
    pub space: Vec<f32>,

    pub fonts: FontFamilies,

    /// Font sizes in pixels
    pub font_sizes: Vec<f32>,

    /// Cumulative scale already applied to `font_sizes`
    #[serde(default = "default_font_scale", skip_serializing_if = "is_unit_scale")]
    pub font_scale: f32,

    pub font_weights: FontWeights,
    pub line_heights: LineHeights,

    // Layout
    pub breakpoints: Vec<String>,
    pub sizes: Vec<f32>,
    pub radii: Vec<f32>,
    pub shadows: Vec<String>,
    pub z_indices: Vec<i32>,

    pub colors: ColorTokens,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub modes: Modes,

    // Component variants
    #[serde(default)]
    pub buttons: Variants,
    #[serde(default)]
    pub text: Variants,
    #[serde(default)]
    pub cards: Variants,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            space: Vec::new(),
            fonts: FontFamilies::new(),
            font_sizes: Vec::new(),
            font_scale: default_font_scale(),
            font_weights: FontWeights::new(),
            line_heights: LineHeights::new(),
            breakpoints: Vec::new(),
            sizes: Vec::new(),
            radii: Vec::new(),
            shadows: Vec::new(),
            z_indices: Vec::new(),
            colors: ColorTokens::default(),
            modes: Modes::new(),
            buttons: Variants::new(),
            text: Variants::new(),
            cards: Variants::new(),
        }
    }
}

impl Theme {
    /// Font family for a role, if the theme defines it
    pub fn font(&self, role: FontRole) -> Option<&str> {
        self.fonts.get(role.key()).map(String::as_str)
    }

    /// Names of the color modes this theme carries
    pub fn mode_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.modes.keys().map(String::as_str)
    }

    pub fn has_mode(&self, mode: &str) -> bool {
        self.modes.contains_key(mode)
    }
}

/// A sparse theme used as an override layer by [`merge_themes`](crate::merge_themes).
///
/// Scale fields replace the accumulated value wholesale when set (an empty
/// vector is an explicit override, not "unset"). Map fields merge key-wise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontFamilies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_sizes: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weights: Option<FontWeights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_heights: Option<LineHeights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radii: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_indices: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Variants>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Variants>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Variants>,
}

impl PartialTheme {
    /// An override layer that only touches colors
    pub fn colors(colors: ColorOverrides) -> Self {
        Self {
            colors: Some(colors),
            ..Self::default()
        }
    }
}

/// Overrides accepted by [`make_theme`](crate::make_theme)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOverrides {
    pub colors: Option<ColorOverrides>,
    pub fonts: Option<FontFamilies>,
    pub font_sizes: Option<Vec<f32>>,
    pub space: Option<Vec<f32>>,
    pub radii: Option<Vec<f32>>,
}

impl From<ThemeOverrides> for PartialTheme {
    fn from(overrides: ThemeOverrides) -> Self {
        Self {
            colors: overrides.colors,
            fonts: overrides.fonts,
            font_sizes: overrides.font_sizes,
            space: overrides.space,
            radii: overrides.radii,
            ..Self::default()
        }
    }
}
