//! Typography tokens for theming

use indexmap::IndexMap;
use std::fmt;

/// Font families keyed by role (`body`, `heading`, `monospace`).
pub type FontFamilies = IndexMap<String, String>;

/// Numeric font weights keyed by semantic role (`body`, `bold`, ...).
pub type FontWeights = IndexMap<String, f32>;

/// Unitless line heights keyed by semantic role (`body`, `tight`, ...).
pub type LineHeights = IndexMap<String, f32>;

/// Index of the canonical body size in a font-size scale.
pub const BODY_FONT_SIZE_INDEX: usize = 2;

/// Font family roles every theme defines
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontRole {
    Body,
    Heading,
    Monospace,
}

impl FontRole {
    pub const ALL: [FontRole; 3] = [FontRole::Body, FontRole::Heading, FontRole::Monospace];

    /// Key used in the `fonts` map
    pub fn key(self) -> &'static str {
        match self {
            FontRole::Body => "body",
            FontRole::Heading => "heading",
            FontRole::Monospace => "monospace",
        }
    }
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
