//! Color tokens for theming
//!
//! Color values are opaque CSS strings (`#66b3ff`, `rgba(0, 0, 0, 0.1)`, ...).
//! Nothing here parses or validates them.

use rustc_hash::FxHashMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ColorToken {
    // Base colors
    Text,
    Background,
    Primary,
    Secondary,
    Accent,
    Highlight,
    Muted,

    // Status colors
    Success,
    Warning,
    Error,
    Info,

    // Structural colors
    Border,
    BackgroundSecondary,
    BackgroundTertiary,
    BackgroundLight,
    BackgroundHover,
    Surface,
    TextSecondary,
    TextTertiary,
    TextMuted,

    // Optional colors
    HighlightBg,
    HighlightBorder,
    TextOnPrimary,
}

impl ColorToken {
    /// Every token, in palette order.
    pub const ALL: [ColorToken; 23] = [
        ColorToken::Text,
        ColorToken::Background,
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Accent,
        ColorToken::Highlight,
        ColorToken::Muted,
        ColorToken::Success,
        ColorToken::Warning,
        ColorToken::Error,
        ColorToken::Info,
        ColorToken::Border,
        ColorToken::BackgroundSecondary,
        ColorToken::BackgroundTertiary,
        ColorToken::BackgroundLight,
        ColorToken::BackgroundHover,
        ColorToken::Surface,
        ColorToken::TextSecondary,
        ColorToken::TextTertiary,
        ColorToken::TextMuted,
        ColorToken::HighlightBg,
        ColorToken::HighlightBorder,
        ColorToken::TextOnPrimary,
    ];

    /// Wire key used in theme files and style objects.
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Text => "text",
            ColorToken::Background => "background",
            ColorToken::Primary => "primary",
            ColorToken::Secondary => "secondary",
            ColorToken::Accent => "accent",
            ColorToken::Highlight => "highlight",
            ColorToken::Muted => "muted",
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
            ColorToken::Error => "error",
            ColorToken::Info => "info",
            ColorToken::Border => "border",
            ColorToken::BackgroundSecondary => "backgroundSecondary",
            ColorToken::BackgroundTertiary => "backgroundTertiary",
            ColorToken::BackgroundLight => "backgroundLight",
            ColorToken::BackgroundHover => "backgroundHover",
            ColorToken::Surface => "surface",
            ColorToken::TextSecondary => "textSecondary",
            ColorToken::TextTertiary => "textTertiary",
            ColorToken::TextMuted => "textMuted",
            ColorToken::HighlightBg => "highlightBg",
            ColorToken::HighlightBorder => "highlightBorder",
            ColorToken::TextOnPrimary => "textOnPrimary",
        }
    }

    /// Look up a token by its wire key. Unknown keys yield `None`.
    pub fn parse(key: &str) -> Option<ColorToken> {
        Self::ALL.iter().copied().find(|token| token.name() == key)
    }

    /// Whether a palette may leave this token unset.
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            ColorToken::HighlightBg | ColorToken::HighlightBorder | ColorToken::TextOnPrimary
        )
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a known color key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownColorToken(pub String);

impl fmt::Display for UnknownColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color token `{}`", self.0)
    }
}

impl std::error::Error for UnknownColorToken {}

impl FromStr for ColorToken {
    type Err = UnknownColorToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownColorToken(s.to_string()))
    }
}

// Tokens travel as their wire key so they work as map keys in any format.
impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ColorToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TokenVisitor;

        impl Visitor<'_> for TokenVisitor {
            type Value = ColorToken;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a semantic color key such as `primary` or `textSecondary`")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ColorToken, E> {
                ColorToken::parse(v).ok_or_else(|| E::custom(UnknownColorToken(v.to_string())))
            }
        }

        deserializer.deserialize_str(TokenVisitor)
    }
}

/// A partial color map: only the keys that differ from a base palette.
///
/// Mode entries and every color override argument use this shape.
pub type ColorOverrides = FxHashMap<ColorToken, String>;

/// Build a [`ColorOverrides`] from `(token, value)` pairs.
pub fn color_overrides<I, V>(pairs: I) -> ColorOverrides
where
    I: IntoIterator<Item = (ColorToken, V)>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(token, value)| (token, value.into()))
        .collect()
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    // Base colors
    pub text: String,
    pub background: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub highlight: String,
    pub muted: String,

    // Status colors
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,

    // Structural colors
    pub border: String,
    pub background_secondary: String,
    pub background_tertiary: String,
    pub background_light: String,
    pub background_hover: String,
    pub surface: String,
    pub text_secondary: String,
    pub text_tertiary: String,
    pub text_muted: String,

    // Search highlight colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_border: Option<String>,

    // Text drawn on top of `primary`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_on_primary: Option<String>,
}

impl ColorTokens {
    /// Get a color by token key. Optional tokens that are unset yield `None`.
    pub fn get(&self, token: ColorToken) -> Option<&str> {
        match token {
            ColorToken::Text => Some(&self.text),
            ColorToken::Background => Some(&self.background),
            ColorToken::Primary => Some(&self.primary),
            ColorToken::Secondary => Some(&self.secondary),
            ColorToken::Accent => Some(&self.accent),
            ColorToken::Highlight => Some(&self.highlight),
            ColorToken::Muted => Some(&self.muted),
            ColorToken::Success => Some(&self.success),
            ColorToken::Warning => Some(&self.warning),
            ColorToken::Error => Some(&self.error),
            ColorToken::Info => Some(&self.info),
            ColorToken::Border => Some(&self.border),
            ColorToken::BackgroundSecondary => Some(&self.background_secondary),
            ColorToken::BackgroundTertiary => Some(&self.background_tertiary),
            ColorToken::BackgroundLight => Some(&self.background_light),
            ColorToken::BackgroundHover => Some(&self.background_hover),
            ColorToken::Surface => Some(&self.surface),
            ColorToken::TextSecondary => Some(&self.text_secondary),
            ColorToken::TextTertiary => Some(&self.text_tertiary),
            ColorToken::TextMuted => Some(&self.text_muted),
            ColorToken::HighlightBg => self.highlight_bg.as_deref(),
            ColorToken::HighlightBorder => self.highlight_border.as_deref(),
            ColorToken::TextOnPrimary => self.text_on_primary.as_deref(),
        }
    }

    /// Get a color by its wire key (`"primary"`, `"textSecondary"`, ...).
    pub fn get_by_name(&self, key: &str) -> Option<&str> {
        ColorToken::parse(key).and_then(|token| self.get(token))
    }

    /// Set a color by token key
    pub fn set(&mut self, token: ColorToken, value: impl Into<String>) {
        let value = value.into();
        match token {
            ColorToken::Text => self.text = value,
            ColorToken::Background => self.background = value,
            ColorToken::Primary => self.primary = value,
            ColorToken::Secondary => self.secondary = value,
            ColorToken::Accent => self.accent = value,
            ColorToken::Highlight => self.highlight = value,
            ColorToken::Muted => self.muted = value,
            ColorToken::Success => self.success = value,
            ColorToken::Warning => self.warning = value,
            ColorToken::Error => self.error = value,
            ColorToken::Info => self.info = value,
            ColorToken::Border => self.border = value,
            ColorToken::BackgroundSecondary => self.background_secondary = value,
            ColorToken::BackgroundTertiary => self.background_tertiary = value,
            ColorToken::BackgroundLight => self.background_light = value,
            ColorToken::BackgroundHover => self.background_hover = value,
            ColorToken::Surface => self.surface = value,
            ColorToken::TextSecondary => self.text_secondary = value,
            ColorToken::TextTertiary => self.text_tertiary = value,
            ColorToken::TextMuted => self.text_muted = value,
            ColorToken::HighlightBg => self.highlight_bg = Some(value),
            ColorToken::HighlightBorder => self.highlight_border = Some(value),
            ColorToken::TextOnPrimary => self.text_on_primary = Some(value),
        }
    }

    /// Iterate over every present `(token, value)` pair in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, &str)> + '_ {
        ColorToken::ALL
            .iter()
            .filter_map(move |&token| self.get(token).map(|value| (token, value)))
    }

    /// Shallow key-wise overlay: keys present in `overrides` win, every other
    /// key keeps this palette's value.
    pub fn overlay(&self, overrides: &ColorOverrides) -> ColorTokens {
        let mut colors = self.clone();
        for (&token, value) in overrides {
            colors.set(token, value.clone());
        }
        colors
    }

    /// Expand this palette into a partial map holding every present key.
    pub fn to_overrides(&self) -> ColorOverrides {
        self.iter()
            .map(|(token, value)| (token, value.to_string()))
            .collect()
    }
}
