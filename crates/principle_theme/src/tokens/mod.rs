//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a theme:
//! - Colors (semantic palette plus partial per-mode palettes)
//! - Typography (font families, weights, line heights)
//!
//! Index-addressed scales (space, font sizes, radii, shadows, ...) are plain
//! vectors on [`Theme`](crate::Theme) and are read through [`crate::access`].

mod color;
mod typography;

pub use color::*;
pub use typography::*;
