//! Theme configuration file handling (`principle-theme.toml`)

use crate::compose::override_colors;
use crate::error::ThemeError;
use crate::presets::{theme_from_toml, ThemePreset};
use crate::scale::scale_fonts;
use crate::state::ThemeProvider;
use crate::store::FileModeStore;
use crate::theme::Theme;
use crate::tokens::ColorOverrides;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name looked up by [`ThemeConfig::load_from_dir`]
pub const CONFIG_FILE_NAME: &str = "principle-theme.toml";

/// Mode file used when `store_path` is unset (relative to the config)
pub const DEFAULT_STORE_PATH: &str = ".principle-theme/mode.toml";

fn default_preset() -> String {
    ThemePreset::default().id().to_string()
}

/// Top-level theme configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Built-in preset id
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Custom theme file used instead of the preset (relative to the config)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_path: Option<PathBuf>,

    /// Initial mode; when unset the saved mode is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Font scale applied on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_scale: Option<f32>,

    /// File the selected mode is persisted to; [`DEFAULT_STORE_PATH`] when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    /// Base color overrides
    #[serde(default, skip_serializing_if = "ColorOverrides::is_empty")]
    pub colors: ColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            theme_path: None,
            mode: None,
            font_scale: None,
            store_path: None,
            colors: ColorOverrides::default(),
        }
    }
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn config_file(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

fn read(path: &Path) -> Result<String, ThemeError> {
    fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl ThemeConfig {
    /// Load configuration from a file, or from `principle-theme.toml` inside
    /// a directory.
    pub fn load_from_dir(path: &Path) -> Result<Self, ThemeError> {
        let config_path = config_file(path);
        let content = read(&config_path)?;
        let config: ThemeConfig = toml::from_str(&content)?;
        tracing::debug!("loaded theme config from {}", config_path.display());
        Ok(config)
    }

    /// Like [`load_from_dir`](Self::load_from_dir), falling back to defaults
    /// when `path` is a directory without a config file. A named file that
    /// does not exist is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ThemeError> {
        if path.is_dir() && !path.join(CONFIG_FILE_NAME).exists() {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, path.display());
            return Ok(Self::default());
        }
        Self::load_from_dir(path)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the configured theme: preset (or custom file), then color
    /// overrides, then font scale.
    pub fn theme(&self, base_dir: &Path) -> Result<Theme, ThemeError> {
        let mut theme = match &self.theme_path {
            Some(path) => theme_from_toml(&read(&resolve(base_dir, path))?)?,
            None => self.preset.parse::<ThemePreset>()?.theme()?,
        };

        if !self.colors.is_empty() {
            theme = override_colors(&theme, &self.colors);
        }
        if let Some(scale) = self.font_scale {
            theme = scale_fonts(&theme, scale);
        }
        Ok(theme)
    }

    /// The configured mode store
    pub fn mode_store(&self, base_dir: &Path) -> FileModeStore {
        let path = self
            .store_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_STORE_PATH));
        FileModeStore::new(resolve(base_dir, path))
    }

    /// Mount a provider for this configuration.
    pub fn mount(&self, base_dir: &Path) -> Result<ThemeProvider, ThemeError> {
        let theme = self.theme(base_dir)?;
        Ok(ThemeProvider::mount(
            theme,
            self.mode.as_deref(),
            Box::new(self.mode_store(base_dir)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ModeStore, MODE_STORAGE_KEY};
    use crate::tokens::ColorToken;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "principle_theme_config_{}_{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config: ThemeConfig = toml::from_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.preset, "terminal");
    }

    #[test]
    fn full_config_parses() {
        let config: ThemeConfig = toml::from_str(
            r##"
preset = "glass"
mode = "dark"
font_scale = 1.2
store_path = "state/mode.toml"

[colors]
primary = "#ff5500"
"##,
        )
        .unwrap();

        assert_eq!(config.mode.as_deref(), Some("dark"));
        assert_eq!(config.font_scale, Some(1.2));
        assert_eq!(
            config.colors.get(&ColorToken::Primary).map(String::as_str),
            Some("#ff5500")
        );
    }

    #[test]
    fn theme_applies_overrides_then_scale() {
        let mut config = ThemeConfig {
            font_scale: Some(2.0),
            ..ThemeConfig::default()
        };
        config
            .colors
            .insert(ColorToken::Primary, "#ff5500".to_string());

        let theme = config.theme(Path::new(".")).unwrap();
        assert_eq!(theme.colors.primary, "#ff5500");
        assert_eq!(theme.font_scale, 2.0);
        assert_eq!(theme.font_sizes[0], 24.0);
    }

    #[test]
    fn unknown_preset_is_reported() {
        let config = ThemeConfig {
            preset: "neon".into(),
            ..ThemeConfig::default()
        };
        assert!(matches!(
            config.theme(Path::new(".")),
            Err(ThemeError::UnknownPreset(_))
        ));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = ThemeConfig {
            mode: Some("light".into()),
            ..ThemeConfig::default()
        };
        let text = config.to_toml().unwrap();
        let back: ThemeConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn directory_without_config_uses_defaults() {
        let dir = scratch_dir("empty");
        assert_eq!(ThemeConfig::load_or_default(&dir).unwrap(), ThemeConfig::default());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_named_config_file_is_an_error() {
        let dir = scratch_dir("missing");
        let path = dir.join("custom-theme.toml");

        let err = ThemeConfig::load_or_default(&path).unwrap_err();
        match err {
            ThemeError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected an i/o error, got {other:?}"),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn config_dir_with_custom_theme_file_mounts() {
        let dir = scratch_dir("custom");
        fs::write(dir.join("brand.toml"), ThemePreset::Markdown.source()).unwrap();
        fs::write(
            dir.join(CONFIG_FILE_NAME),
            r##"
preset = "glass"
theme_path = "brand.toml"
mode = "light"

[colors]
primary = "#ff5500"
"##,
        )
        .unwrap();

        let config = ThemeConfig::load_or_default(&dir).unwrap();
        assert_eq!(config, ThemeConfig::load_from_dir(&dir.join(CONFIG_FILE_NAME)).unwrap());

        let markdown = ThemePreset::Markdown.theme().unwrap();
        let theme = config.theme(&dir).unwrap();
        assert_eq!(theme.colors.primary, "#ff5500");
        assert_eq!(theme.colors.text, markdown.colors.text);
        assert_eq!(theme.font_sizes, markdown.font_sizes);

        let provider = config.mount(&dir).unwrap();
        assert_eq!(provider.mode().as_deref(), Some("light"));
        assert_eq!(provider.theme().colors.primary, "#ff5500");

        let store = config.mode_store(&dir);
        assert_eq!(store.path(), dir.join(DEFAULT_STORE_PATH));
        assert_eq!(store.load(MODE_STORAGE_KEY).unwrap().as_deref(), Some("light"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn explicit_store_path_is_relative_to_config() {
        let config = ThemeConfig {
            store_path: Some(PathBuf::from("state/mode.toml")),
            ..ThemeConfig::default()
        };
        let store = config.mode_store(Path::new("/srv/app"));
        assert_eq!(store.path(), Path::new("/srv/app/state/mode.toml"));
    }
}
