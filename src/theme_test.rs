use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_both_literal_names() {
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
}

#[test]
fn parse_is_case_sensitive() {
    assert!(matches!(
        "Dark".parse::<Theme>(),
        Err(ThemeError::UnknownTheme(raw)) if raw == "Dark"
    ));
}

#[test]
fn from_stored_defaults_absent_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn from_stored_defaults_unknown_to_light() {
    assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    assert_eq!(Theme::from_stored(Some(" dark ")), Theme::Light);
}

#[test]
fn from_stored_keeps_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

// =============================================================
// Flip and labels
// =============================================================

#[test]
fn toggled_is_a_binary_flip() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn label_is_sun_iff_dark() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.label() == "☀️", theme.is_dark());
    }
    assert_eq!(Theme::Light.label(), "🌙");
}

#[test]
fn action_title_names_the_target_theme() {
    assert_eq!(Theme::Light.action_title(), "Switch to dark mode");
    assert_eq!(Theme::Dark.action_title(), "Switch to light mode");
}

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn display_matches_stored_literal() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), Theme::Light.as_str());
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
}
