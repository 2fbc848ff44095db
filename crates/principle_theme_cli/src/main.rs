//! principle-theme - inspect and manage PrincipleMD themes
//!
//! Provides:
//! - Preset listing with available modes
//! - Showcase rendering of every scale and color (text or JSON)
//! - Theme export as TOML or JSON
//! - Reading and writing the persisted color mode

mod commands;
mod render;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Inspect and manage PrincipleMD themes
#[derive(Parser, Debug)]
#[command(name = "principle-theme")]
#[command(about = "Inspect and manage PrincipleMD themes")]
#[command(version)]
struct Cli {
    /// Config file, or directory containing principle-theme.toml
    #[arg(short, long, global = true, default_value = ".")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in presets and their modes
    List,

    /// Print theme values section by section
    Show {
        #[command(flatten)]
        source: ThemeSource,

        /// Sections to print (colors, typography, spacing, shadows, radii); all by default
        #[arg(short, long = "section", value_delimiter = ',')]
        sections: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Text)]
        format: ShowFormat,
    },

    /// Print the resolved theme
    Export {
        #[command(flatten)]
        source: ThemeSource,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Toml)]
        format: ExportFormat,
    },

    /// Read or change the saved color mode
    Mode {
        #[command(subcommand)]
        action: ModeAction,
    },
}

/// Where the theme comes from; unset flags fall back to the config file
#[derive(Args, Debug, Clone, Default)]
struct ThemeSource {
    /// Built-in preset id
    #[arg(short, long)]
    preset: Option<String>,

    /// Custom theme TOML file
    #[arg(short, long, conflicts_with = "preset")]
    theme: Option<PathBuf>,

    /// Color mode to apply
    #[arg(short, long)]
    mode: Option<String>,

    /// Font scale to apply (positive)
    #[arg(long, value_parser = parse_scale)]
    scale: Option<f32>,
}

fn parse_scale(s: &str) -> Result<f32, String> {
    let scale: f32 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("font scale must be a positive number, got `{s}`"))
    }
}

#[derive(Subcommand, Debug)]
enum ModeAction {
    /// Print the saved mode
    Get,
    /// Save a mode
    Set { name: String },
    /// Remove the saved mode
    Clear,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ShowFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ExportFormat {
    Toml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let ctx = commands::Context::load(&cli.config)?;

    match cli.command {
        Command::List => commands::list(),
        Command::Show {
            source,
            sections,
            format,
        } => commands::show(&ctx, &source, &sections, format),
        Command::Export { source, format } => commands::export(&ctx, &source, format),
        Command::Mode { action } => commands::mode(&ctx, action),
    }
}
