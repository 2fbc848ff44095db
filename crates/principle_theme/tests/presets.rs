use principle_theme::{
    resolve_colors, theme_from_toml, theme_to_toml, ColorToken, FontRole, ThemePreset,
};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["glass", "markdown", "terminal"]);
    assert_eq!(ThemePreset::default(), ThemePreset::Terminal);
}

#[test]
fn every_preset_parses_with_full_scales() {
    for preset in ThemePreset::all() {
        let theme = preset
            .theme()
            .unwrap_or_else(|e| panic!("preset {preset:?} failed to parse: {e}"));

        assert!(theme.font_sizes.len() >= 3, "preset={preset:?}");
        assert_eq!(theme.space[0], 0.0, "preset={preset:?}");
        assert_eq!(theme.shadows[0], "none", "preset={preset:?}");
        assert_eq!(theme.font_scale, 1.0, "preset={preset:?}");
        for role in FontRole::ALL {
            assert!(theme.font(role).is_some(), "preset={preset:?} role={role}");
        }
        for token in ColorToken::ALL.iter().filter(|t| !t.is_optional()) {
            assert!(
                theme.colors.get(*token).is_some_and(|c| !c.is_empty()),
                "preset={preset:?} token={token}"
            );
        }
    }
}

#[test]
fn preset_ids_parse_back() {
    for preset in ThemePreset::all() {
        assert_eq!(preset.id().parse::<ThemePreset>().unwrap(), *preset);
    }
    assert_eq!("TERMINAL".parse::<ThemePreset>().unwrap(), ThemePreset::Terminal);
    assert!("neon".parse::<ThemePreset>().is_err());
}

#[test]
fn modal_presets_have_distinct_primary_per_mode() {
    for (preset, mode) in [
        (ThemePreset::Terminal, "light"),
        (ThemePreset::Glass, "dark"),
        (ThemePreset::Glass, "frosted"),
    ] {
        let theme = preset.theme().unwrap();
        assert!(theme.has_mode(mode), "preset={preset:?} mode={mode}");
        assert_ne!(
            resolve_colors(&theme, Some(mode)).primary,
            theme.colors.primary,
            "preset={preset:?} mode={mode}"
        );
    }
}

#[test]
fn terminal_light_mode_keeps_base_text() {
    let theme = ThemePreset::Terminal.theme().unwrap();
    let light = resolve_colors(&theme, Some("light"));
    assert_eq!(theme.colors.primary, "#66b3ff");
    assert_eq!(light.primary, "#0066cc");
    assert_eq!(light.text, theme.colors.text);
}

#[test]
fn presets_survive_toml_and_json_round_trips() {
    for preset in ThemePreset::all() {
        let theme = preset.theme().unwrap();

        let toml_text = theme_to_toml(&theme).unwrap();
        assert_eq!(theme_from_toml(&toml_text).unwrap(), theme, "preset={preset:?}");

        let json = serde_json::to_string(&theme).unwrap();
        let back: principle_theme::Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme, "preset={preset:?}");
    }
}
