//! Mode-aware color resolution
//!
//! Modes are partial palettes: a key a mode leaves out falls back to the base
//! palette. An unknown mode is "no mode", never an error.

use crate::theme::Theme;
use crate::tokens::ColorTokens;

/// Effective colors of `theme` under `mode`.
///
/// Returns a copy of the base colors when `mode` is `None` or names a mode the
/// theme does not define; otherwise the mode's entries overlaid on the base.
pub fn resolve_colors(theme: &Theme, mode: Option<&str>) -> ColorTokens {
    match mode.and_then(|name| theme.modes.get(name)) {
        Some(overrides) => theme.colors.overlay(overrides),
        None => theme.colors.clone(),
    }
}

impl Theme {
    /// See [`resolve_colors`].
    pub fn colors_for_mode(&self, mode: Option<&str>) -> ColorTokens {
        resolve_colors(self, mode)
    }

    /// A copy of this theme whose base colors are the ones `mode` resolves to.
    ///
    /// This is the "active" theme the provider hands to consumers. Modes are
    /// kept so the copy can still be switched.
    pub fn with_mode(&self, mode: Option<&str>) -> Theme {
        Theme {
            colors: resolve_colors(self, mode),
            ..self.clone()
        }
    }
}
