//! PrincipleMD Theme System
//!
//! Design-token themes (palettes, type scales, spacing, shadows, component
//! variants) and the small amount of logic that reads, merges and scales them.
//!
//! # Overview
//!
//! - **Token schema**: [`Theme`], [`ColorTokens`], [`StyleObject`]
//! - **Mode resolution**: [`resolve_colors`] overlays a named partial palette
//!   on the base colors
//! - **Composition**: [`override_colors`], [`make_theme`], [`add_mode`],
//!   [`merge_themes`]
//! - **Font scaling**: [`scale_fonts`] and the increase/decrease/reset steps
//! - **Accessors**: bounds-safe lookups in [`access`]
//! - **Active theme**: [`ThemeProvider`] and [`use_theme`]
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use principle_theme::{use_theme, MemoryModeStore, ThemePreset, ThemeProvider};
//!
//! // Mount a provider at app startup
//! let theme = ThemePreset::Terminal.theme()?;
//! ThemeProvider::install(ThemeProvider::mount(theme, None, Box::new(MemoryModeStore::new())));
//!
//! // Read the active theme anywhere
//! let ctx = use_theme()?;
//! let primary = principle_theme::access::color(&ctx.theme, "primary");
//! ctx.set_mode(Some("light"));
//! ```
//!
//! # Failure model
//!
//! Lookups never fail: a missing index, mode or color key degrades to a fixed
//! default. The one hard failure is asking for the active theme with no
//! provider installed ([`ThemeError::OutsideProvider`]).

pub mod access;
pub mod compose;
pub mod config;
pub mod error;
pub mod mode;
pub mod presets;
pub mod scale;
pub mod showcase;
pub mod state;
pub mod store;
pub mod style;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use access::{apply_theme_keys, responsive, Responsive};
pub use compose::{add_mode, make_theme, merge_themes, override_colors};
pub use config::{ThemeConfig, CONFIG_FILE_NAME, DEFAULT_STORE_PATH};
pub use error::ThemeError;
pub use mode::resolve_colors;
pub use presets::{preset_theme, theme_from_toml, theme_to_toml, ThemePreset};
pub use scale::{
    decrease_font_scale, increase_font_scale, reset_font_scale, scale_fonts, MAX_FONT_SCALE,
    MIN_FONT_SCALE,
};
pub use showcase::{showcase, SectionView, ShowcaseEntry, ShowcaseSection};
pub use state::{set_redraw_callback, use_theme, with_theme, ThemeContext, ThemeProvider};
pub use store::{FileModeStore, MemoryModeStore, ModeStore, MODE_STORAGE_KEY};
pub use style::{pseudo_state, PseudoState, StyleObject, StyleValue, Variants};
pub use theme::{Modes, PartialTheme, Theme, ThemeOverrides};
pub use tokens::*;
