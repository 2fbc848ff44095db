use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    /// The active theme was requested with no provider installed.
    #[error("no theme provider is installed; mount a ThemeProvider before calling use_theme()")]
    OutsideProvider,

    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),

    #[error("unknown showcase section `{0}` (expected colors, typography, spacing, shadows or radii)")]
    UnknownSection(String),

    #[error("failed to parse theme data: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize theme data: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by a custom [`ModeStore`](crate::ModeStore) backend.
    #[error("mode store error: {0}")]
    Store(String),
}
