//! Theme composition: overrides, extension, new modes and layered merges
//!
//! Every function here takes the base by reference and returns a new
//! [`Theme`]; nothing is mutated in place.

use crate::theme::{PartialTheme, Theme, ThemeOverrides};
use crate::tokens::ColorOverrides;
use indexmap::IndexMap;

/// Override keys win, every other key keeps the accumulated value.
fn merge_map<V: Clone>(acc: &mut IndexMap<String, V>, overrides: &IndexMap<String, V>) {
    for (key, value) in overrides {
        acc.insert(key.clone(), value.clone());
    }
}

fn replace_scale<T: Clone>(acc: &mut Vec<T>, scale: &Option<Vec<T>>) {
    if let Some(scale) = scale {
        *acc = scale.clone();
    }
}

/// A copy of `theme` whose colors are shallow-merged with `colors`.
pub fn override_colors(theme: &Theme, colors: &ColorOverrides) -> Theme {
    Theme {
        colors: theme.colors.overlay(colors),
        ..theme.clone()
    }
}

/// Extend `base`: colors and fonts merge key-wise, `font_sizes`, `space` and
/// `radii` are replaced wholesale when provided.
pub fn make_theme(base: &Theme, overrides: ThemeOverrides) -> Theme {
    merge_themes(base, &[PartialTheme::from(overrides)])
}

/// Add (or replace) the mode `mode_name`.
///
/// The new mode starts from the base palette, or from `base_mode` resolved
/// against it when that mode exists, and then takes `colors` on top. The
/// stored entry holds the full resulting palette. Other modes are preserved.
pub fn add_mode(
    theme: &Theme,
    mode_name: &str,
    colors: &ColorOverrides,
    base_mode: Option<&str>,
) -> Theme {
    let start = match base_mode.and_then(|name| theme.modes.get(name)) {
        Some(parent) => theme.colors.overlay(parent),
        None => {
            if let Some(name) = base_mode {
                tracing::debug!("add_mode: base mode `{}` not found, using base colors", name);
            }
            theme.colors.clone()
        }
    };

    let mut modes = theme.modes.clone();
    modes.insert(mode_name.to_string(), start.overlay(colors).to_overrides());

    Theme {
        modes,
        ..theme.clone()
    }
}

/// Fold `overrides` over `base`, left to right.
///
/// Scale fields (`space`, `font_sizes`, `breakpoints`, `sizes`, `radii`,
/// `shadows`, `z_indices`) are replaced wholesale by a layer that sets them.
/// Map fields (`fonts`, `font_weights`, `line_heights`, `colors`, `buttons`,
/// `text`, `cards`) merge key-wise. `modes` and `font_scale` carry over from
/// the base. Later layers win.
pub fn merge_themes(base: &Theme, overrides: &[PartialTheme]) -> Theme {
    overrides
        .iter()
        .enumerate()
        .fold(base.clone(), |mut acc, (layer, o)| {
            tracing::trace!("merge_themes: applying override layer {}", layer);

            replace_scale(&mut acc.space, &o.space);
            replace_scale(&mut acc.font_sizes, &o.font_sizes);
            replace_scale(&mut acc.breakpoints, &o.breakpoints);
            replace_scale(&mut acc.sizes, &o.sizes);
            replace_scale(&mut acc.radii, &o.radii);
            replace_scale(&mut acc.shadows, &o.shadows);
            replace_scale(&mut acc.z_indices, &o.z_indices);

            if let Some(fonts) = &o.fonts {
                merge_map(&mut acc.fonts, fonts);
            }
            if let Some(weights) = &o.font_weights {
                merge_map(&mut acc.font_weights, weights);
            }
            if let Some(heights) = &o.line_heights {
                merge_map(&mut acc.line_heights, heights);
            }
            if let Some(colors) = &o.colors {
                acc.colors = acc.colors.overlay(colors);
            }
            if let Some(buttons) = &o.buttons {
                merge_map(&mut acc.buttons, buttons);
            }
            if let Some(text) = &o.text {
                merge_map(&mut acc.text, text);
            }
            if let Some(cards) = &o.cards {
                merge_map(&mut acc.cards, cards);
            }

            acc
        })
}

impl Theme {
    /// See [`override_colors`].
    pub fn with_colors(&self, colors: &ColorOverrides) -> Theme {
        override_colors(self, colors)
    }

    /// See [`merge_themes`].
    pub fn merged(&self, overrides: &[PartialTheme]) -> Theme {
        merge_themes(self, overrides)
    }
}
