//! Subcommand implementations

use anyhow::{Context as _, Result};
use principle_theme::{
    showcase, theme_to_toml, FileModeStore, MemoryModeStore, ModeStore, ShowcaseSection, Theme,
    ThemeConfig, ThemePreset, ThemeProvider, MODE_STORAGE_KEY,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::render;
use crate::{ExportFormat, ModeAction, ShowFormat, ThemeSource};

/// Loaded configuration plus the directory relative paths resolve against
pub struct Context {
    config: ThemeConfig,
    base_dir: PathBuf,
}

impl Context {
    pub fn load(path: &Path) -> Result<Self> {
        let config = ThemeConfig::load_or_default(path)
            .with_context(|| format!("Failed to load theme config from {}", path.display()))?;
        let base_dir = if path.is_dir() {
            path.to_path_buf()
        } else {
            path.parent().map(Path::to_path_buf).unwrap_or_default()
        };
        debug!("using preset `{}` from {}", config.preset, base_dir.display());
        Ok(Self { config, base_dir })
    }

    fn store(&self) -> FileModeStore {
        self.config.mode_store(&self.base_dir)
    }

    /// The config with command-line flags layered on top
    fn config_for(&self, source: &ThemeSource) -> ThemeConfig {
        let mut config = self.config.clone();
        if let Some(preset) = &source.preset {
            config.preset = preset.clone();
            config.theme_path = None;
        }
        if let Some(theme) = &source.theme {
            config.theme_path = Some(theme.clone());
        }
        if let Some(scale) = source.scale {
            config.font_scale = Some(scale);
        }
        if let Some(mode) = &source.mode {
            config.mode = Some(mode.clone());
        }
        config
    }

    /// Resolve the active theme without writing to the mode file.
    ///
    /// The provider is mounted over an in-memory copy of the saved mode, so
    /// previews never change what is persisted.
    fn active_theme(&self, source: &ThemeSource) -> Result<(Theme, Option<String>)> {
        let config = self.config_for(source);
        let theme = config
            .theme(&self.base_dir)
            .context("Failed to build theme")?;

        let saved = match self.store().load(MODE_STORAGE_KEY) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("ignoring unreadable mode file: {}", e);
                None
            }
        };
        let preview_store = match saved {
            Some(mode) => MemoryModeStore::with_mode(mode),
            None => MemoryModeStore::new(),
        };

        let provider = ThemeProvider::mount(theme, config.mode.as_deref(), Box::new(preview_store));
        if let Some(mode) = provider.mode() {
            if !provider.base_theme().has_mode(&mode) {
                warn!("theme has no `{}` mode, showing base colors", mode);
            }
        }
        Ok((provider.theme().as_ref().clone(), provider.mode()))
    }
}

pub fn list() -> Result<()> {
    for preset in ThemePreset::all() {
        let theme = preset
            .theme()
            .with_context(|| format!("Built-in preset `{}` is invalid", preset.id()))?;
        let modes: Vec<&str> = theme.mode_names().collect();
        let modes = if modes.is_empty() {
            "-".to_string()
        } else {
            modes.join(", ")
        };
        println!("{:<10} {:<10} modes: {}", preset.id(), preset.display_name(), modes);
    }
    Ok(())
}

pub fn show(ctx: &Context, source: &ThemeSource, sections: &[String], format: ShowFormat) -> Result<()> {
    let sections = sections
        .iter()
        .map(|s| s.parse::<ShowcaseSection>())
        .collect::<Result<Vec<_>, _>>()?;

    let (theme, mode) = ctx.active_theme(source)?;
    let views = showcase(&theme, &sections);

    match format {
        ShowFormat::Text => print!("{}", render::sections_text(&views, mode.as_deref())),
        ShowFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&views).context("Failed to serialize showcase")?
        ),
    }
    Ok(())
}

pub fn export(ctx: &Context, source: &ThemeSource, format: ExportFormat) -> Result<()> {
    let (theme, _) = ctx.active_theme(source)?;
    let text = match format {
        ExportFormat::Toml => theme_to_toml(&theme).context("Failed to serialize theme")?,
        ExportFormat::Json => {
            serde_json::to_string_pretty(&theme).context("Failed to serialize theme")?
        }
    };
    println!("{text}");
    Ok(())
}

pub fn mode(ctx: &Context, action: ModeAction) -> Result<()> {
    let store = ctx.store();
    match action {
        ModeAction::Get => {
            let saved = store
                .load(MODE_STORAGE_KEY)
                .with_context(|| format!("Failed to read {}", store.path().display()))?;
            println!("{}", saved.as_deref().unwrap_or("(none)"));
        }
        ModeAction::Set { name } => {
            if name.is_empty() {
                anyhow::bail!("Mode name must not be empty; use `mode clear` to remove it");
            }
            let theme = ctx.config.theme(&ctx.base_dir).context("Failed to build theme")?;
            if !theme.has_mode(&name) {
                warn!("configured theme has no `{}` mode; it will resolve to base colors", name);
            }
            store
                .save(MODE_STORAGE_KEY, &name)
                .with_context(|| format!("Failed to write {}", store.path().display()))?;
            info!("saved mode `{}` to {}", name, store.path().display());
        }
        ModeAction::Clear => {
            store
                .remove(MODE_STORAGE_KEY)
                .with_context(|| format!("Failed to write {}", store.path().display()))?;
            info!("cleared saved mode");
        }
    }
    Ok(())
}
