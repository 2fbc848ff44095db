//! Showcase enumeration for renderers
//!
//! Lists every scale and color entry of a theme with its key or index and
//! literal value. Scale entries are printed as stored, so a zero font size or
//! an empty shadow shows up as such instead of as its accessor fallback.

use crate::error::ThemeError;
use crate::theme::Theme;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A showcase section
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowcaseSection {
    Colors,
    Typography,
    Spacing,
    Shadows,
    Radii,
}

impl ShowcaseSection {
    pub const ALL: [ShowcaseSection; 5] = [
        ShowcaseSection::Colors,
        ShowcaseSection::Typography,
        ShowcaseSection::Spacing,
        ShowcaseSection::Shadows,
        ShowcaseSection::Radii,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ShowcaseSection::Colors => "colors",
            ShowcaseSection::Typography => "typography",
            ShowcaseSection::Spacing => "spacing",
            ShowcaseSection::Shadows => "shadows",
            ShowcaseSection::Radii => "radii",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ShowcaseSection::Colors => "Colors",
            ShowcaseSection::Typography => "Typography",
            ShowcaseSection::Spacing => "Spacing",
            ShowcaseSection::Shadows => "Shadows",
            ShowcaseSection::Radii => "Border Radii",
        }
    }
}

impl fmt::Display for ShowcaseSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ShowcaseSection {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ThemeError::UnknownSection(s.to_string()))
    }
}

/// One displayed value
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShowcaseEntry {
    /// Key or `scale[index]` label
    pub label: String,
    pub value: String,
}

impl ShowcaseEntry {
    fn new(label: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

/// All entries of one section
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionView {
    pub section: ShowcaseSection,
    pub title: &'static str,
    pub entries: Vec<ShowcaseEntry>,
}

fn colors(theme: &Theme) -> Vec<ShowcaseEntry> {
    theme
        .colors
        .iter()
        .map(|(token, value)| ShowcaseEntry::new(token.name(), value))
        .collect()
}

fn px_scale(name: &str, scale: &[f32]) -> Vec<ShowcaseEntry> {
    scale
        .iter()
        .enumerate()
        .map(|(i, value)| ShowcaseEntry::new(format!("{name}[{i}]"), format!("{value}px")))
        .collect()
}

fn typography(theme: &Theme) -> Vec<ShowcaseEntry> {
    let fonts = theme
        .fonts
        .iter()
        .map(|(role, family)| ShowcaseEntry::new(format!("fonts.{role}"), family));
    let sizes = px_scale("fontSizes", &theme.font_sizes);
    let weights = theme
        .font_weights
        .iter()
        .map(|(role, weight)| ShowcaseEntry::new(format!("fontWeights.{role}"), weight));
    let heights = theme
        .line_heights
        .iter()
        .map(|(role, height)| ShowcaseEntry::new(format!("lineHeights.{role}"), height));

    fonts.chain(sizes).chain(weights).chain(heights).collect()
}

fn shadows(theme: &Theme) -> Vec<ShowcaseEntry> {
    theme
        .shadows
        .iter()
        .enumerate()
        .map(|(i, shadow)| ShowcaseEntry::new(format!("shadows[{i}]"), shadow))
        .collect()
}

/// Enumerate `sections` of `theme`, in the order given. An empty slice means
/// every section.
pub fn showcase(theme: &Theme, sections: &[ShowcaseSection]) -> Vec<SectionView> {
    let sections = if sections.is_empty() {
        &ShowcaseSection::ALL[..]
    } else {
        sections
    };

    sections
        .iter()
        .map(|&section| SectionView {
            section,
            title: section.title(),
            entries: match section {
                ShowcaseSection::Colors => colors(theme),
                ShowcaseSection::Typography => typography(theme),
                ShowcaseSection::Spacing => px_scale("space", &theme.space),
                ShowcaseSection::Shadows => shadows(theme),
                ShowcaseSection::Radii => px_scale("radii", &theme.radii),
            },
        })
        .collect()
}
