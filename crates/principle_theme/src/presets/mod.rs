//! Built-in theme catalog.
//!
//! Presets are kept as TOML literals embedded in the binary and parsed on
//! demand.

use crate::error::ThemeError;
use crate::theme::Theme;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const TERMINAL: &str = include_str!("../../themes/terminal.toml");
const MARKDOWN: &str = include_str!("../../themes/markdown.toml");
const GLASS: &str = include_str!("../../themes/glass.toml");

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Monospace dark theme with a `light` mode. The default.
    #[default]
    Terminal,
    /// Light document theme without modes.
    Markdown,
    /// Translucent theme with `dark` and `frosted` modes.
    Glass,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Markdown => "markdown",
            Self::Glass => "glass",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::Markdown => "Markdown",
            Self::Glass => "Glass",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 3] =
            [ThemePreset::Terminal, ThemePreset::Markdown, ThemePreset::Glass];
        &PRESETS
    }

    /// Raw TOML source of the preset
    pub fn source(self) -> &'static str {
        match self {
            Self::Terminal => TERMINAL,
            Self::Markdown => MARKDOWN,
            Self::Glass => GLASS,
        }
    }

    /// Parse the preset into a [`Theme`].
    pub fn theme(self) -> Result<Theme, ThemeError> {
        tracing::trace!("loading preset {}", self.id());
        Ok(toml::from_str(self.source())?)
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ThemeError::UnknownPreset(s.to_string()))
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_theme(preset: ThemePreset) -> Result<Theme, ThemeError> {
    preset.theme()
}

/// Parse a theme from TOML text (same format as the built-in presets).
pub fn theme_from_toml(source: &str) -> Result<Theme, ThemeError> {
    Ok(toml::from_str(source)?)
}

/// Serialize a theme to TOML text.
pub fn theme_to_toml(theme: &Theme) -> Result<String, ThemeError> {
    Ok(toml::to_string_pretty(theme)?)
}
