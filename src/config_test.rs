use super::*;

#[test]
fn default_targets_theme_toggle() {
    let config = ToggleConfig::default();
    assert_eq!(config.control_id, "theme-toggle");
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.attribute, "data-theme");
    assert!(!config.follow_system);
}

#[test]
fn variant_only_changes_control_id() {
    let variant = ToggleConfig::variant();
    assert_eq!(variant.control_id, "themeToggle");
    assert_eq!(variant.storage_key, ToggleConfig::default().storage_key);
    assert_eq!(variant.attribute, ToggleConfig::default().attribute);
}

#[test]
fn from_json_fills_missing_fields() {
    let config = ToggleConfig::from_json(r#"{"control_id":"nav-theme","follow_system":true}"#).unwrap();
    assert_eq!(config.control_id, "nav-theme");
    assert!(config.follow_system);
    assert_eq!(config.storage_key, STORAGE_KEY);
    assert_eq!(config.attribute, THEME_ATTRIBUTE);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(ToggleConfig::from_json("{}").unwrap(), ToggleConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(
        ToggleConfig::from_json("{control_id:"),
        Err(ThemeError::Config(_))
    ));
}
