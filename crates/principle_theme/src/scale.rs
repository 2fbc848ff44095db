//! Font scaling
//!
//! `font_scale` records how far `font_sizes` already sit from their unscaled
//! baseline. Rescaling divides that out before applying the target, so
//! repeated rescales never compound.

use crate::theme::Theme;

/// Multiplier applied by [`increase_font_scale`]
pub const FONT_SCALE_STEP_UP: f32 = 1.1;
/// Multiplier applied by [`decrease_font_scale`]
pub const FONT_SCALE_STEP_DOWN: f32 = 0.9;
/// Upper clamp for the scale factor (200%)
pub const MAX_FONT_SCALE: f32 = 2.0;
/// Lower clamp for the scale factor (50%)
pub const MIN_FONT_SCALE: f32 = 0.5;

/// The scale `theme.font_sizes` currently carry. Non-positive or non-finite
/// values count as unscaled.
pub fn current_font_scale(theme: &Theme) -> f32 {
    let scale = theme.font_scale;
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// Rescale `theme.font_sizes` to `target` and record `target` as the new scale.
///
/// Each size becomes `round(size * target / current)`.
pub fn scale_fonts(theme: &Theme, target: f32) -> Theme {
    let current = current_font_scale(theme);
    let effective = target / current;

    tracing::debug!(
        "scale_fonts: {:.3} -> {:.3} (effective x{:.3})",
        current,
        target,
        effective
    );

    Theme {
        font_sizes: theme
            .font_sizes
            .iter()
            .map(|size| (size * effective).round())
            .collect(),
        font_scale: target,
        ..theme.clone()
    }
}

/// Grow the scale by 10%, capped at [`MAX_FONT_SCALE`].
pub fn increase_font_scale(theme: &Theme) -> Theme {
    let target = (current_font_scale(theme) * FONT_SCALE_STEP_UP).min(MAX_FONT_SCALE);
    scale_fonts(theme, target)
}

/// Shrink the scale by 10%, floored at [`MIN_FONT_SCALE`].
pub fn decrease_font_scale(theme: &Theme) -> Theme {
    let target = (current_font_scale(theme) * FONT_SCALE_STEP_DOWN).max(MIN_FONT_SCALE);
    scale_fonts(theme, target)
}

/// Return to the unscaled sizes.
pub fn reset_font_scale(theme: &Theme) -> Theme {
    scale_fonts(theme, 1.0)
}

impl Theme {
    /// See [`scale_fonts`].
    pub fn scaled(&self, target: f32) -> Theme {
        scale_fonts(self, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(sizes: &[f32]) -> Theme {
        Theme {
            font_sizes: sizes.to_vec(),
            ..Theme::default()
        }
    }

    #[test]
    fn scales_and_rounds_each_size() {
        let scaled = scale_fonts(&theme(&[12.0, 14.0, 16.0, 18.0, 20.0]), 1.1);
        assert_eq!(scaled.font_sizes, vec![13.0, 15.0, 18.0, 20.0, 22.0]);
        assert_eq!(scaled.font_scale, 1.1);
    }

    #[test]
    fn rescale_divides_out_current_scale() {
        let base = theme(&[12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 32.0, 48.0, 64.0, 96.0]);
        let up = scale_fonts(&base, 1.5);
        assert_eq!(up.font_sizes[0], 18.0);

        let back = scale_fonts(&up, 1.0);
        assert_eq!(back.font_sizes, base.font_sizes);
        assert_eq!(back.font_scale, 1.0);
    }

    #[test]
    fn increase_then_decrease_is_approximately_inverse() {
        let base = theme(&[16.0]);
        let round_trip = decrease_font_scale(&increase_font_scale(&base));
        assert!((round_trip.font_scale - 1.0).abs() < 0.02);
    }

    #[test]
    fn steps_are_clamped() {
        let mut t = theme(&[16.0]);
        for _ in 0..20 {
            t = increase_font_scale(&t);
            assert!(t.font_scale <= MAX_FONT_SCALE);
        }
        assert_eq!(t.font_scale, MAX_FONT_SCALE);

        for _ in 0..40 {
            t = decrease_font_scale(&t);
            assert!(t.font_scale >= MIN_FONT_SCALE);
        }
        assert_eq!(t.font_scale, MIN_FONT_SCALE);
    }

    #[test]
    fn reset_restores_unit_scale() {
        let t = reset_font_scale(&scale_fonts(&theme(&[16.0, 24.0]), 1.25));
        assert_eq!(t.font_scale, 1.0);
        assert_eq!(t.font_sizes, vec![16.0, 24.0]);
    }

    #[test]
    fn bogus_stored_scale_counts_as_unscaled() {
        let mut t = theme(&[10.0]);
        t.font_scale = 0.0;
        assert_eq!(scale_fonts(&t, 2.0).font_sizes, vec![20.0]);
    }
}
