//! Plain-text rendering of showcase sections

use principle_theme::SectionView;
use std::fmt::Write;

/// Render sections as titled, column-aligned `label  value` lines.
pub fn sections_text(views: &[SectionView], mode: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "mode: {}", mode.unwrap_or("default"));

    for view in views {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", view.title);
        let _ = writeln!(out, "{}", "-".repeat(view.title.len()));

        let width = view
            .entries
            .iter()
            .map(|e| e.label.len())
            .max()
            .unwrap_or(0);
        for entry in &view.entries {
            let _ = writeln!(out, "  {:<width$}  {}", entry.label, entry.value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use principle_theme::{showcase, ShowcaseSection, ThemePreset};

    #[test]
    fn renders_title_and_aligned_entries() {
        let theme = ThemePreset::Terminal.theme().unwrap();
        let text = sections_text(&showcase(&theme, &[ShowcaseSection::Radii]), None);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "mode: default");
        assert_eq!(lines[2], "Border Radii");
        assert_eq!(lines[3], "------------");
        assert!(lines[4].starts_with("  radii[0]  "));
    }

    #[test]
    fn names_the_active_mode() {
        let text = sections_text(&[], Some("light"));
        assert_eq!(text, "mode: light\n");
    }
}
