use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_the_three_stored_values() {
    assert_eq!("light".parse::<ThemePreference>(), Ok(ThemePreference::Light));
    assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
    assert_eq!("system".parse::<ThemePreference>(), Ok(ThemePreference::System));
}

#[test]
fn rejects_foreign_values() {
    for raw in ["", "Dark", " dark", "true", "auto", "dim"] {
        assert_eq!(
            raw.parse::<ThemePreference>(),
            Err(ThemeError::InvalidPreference(raw.to_owned())),
            "{raw:?} should not parse"
        );
    }
}

#[test]
fn from_stored_treats_malformed_as_absent() {
    assert_eq!(ThemePreference::from_stored(None), None);
    assert_eq!(ThemePreference::from_stored(Some("purple")), None);
    assert_eq!(ThemePreference::from_stored(Some("dark")), Some(ThemePreference::Dark));
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn explicit_maps_dark_flag() {
    assert_eq!(ThemePreference::explicit(true), ThemePreference::Dark);
    assert_eq!(ThemePreference::explicit(false), ThemePreference::Light);
}

#[test]
fn only_system_is_adaptive() {
    assert!(ThemePreference::Light.is_explicit());
    assert!(ThemePreference::Dark.is_explicit());
    assert!(!ThemePreference::System.is_explicit());
    assert_eq!(ThemePreference::System.as_dark(), None);
    assert_eq!(ThemePreference::Dark.as_dark(), Some(true));
    assert_eq!(ThemePreference::Light.as_dark(), Some(false));
}

#[test]
fn default_is_system() {
    assert_eq!(ThemePreference::default(), ThemePreference::System);
}

#[test]
fn display_matches_stored_form() {
    assert_eq!(ThemePreference::Light.to_string(), "light");
    assert_eq!(ThemePreference::Dark.to_string(), "dark");
    assert_eq!(ThemePreference::System.to_string(), "system");
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&ThemePreference::Dark).unwrap(), "\"dark\"");
    let parsed: ThemePreference = serde_json::from_str("\"system\"").unwrap();
    assert_eq!(parsed, ThemePreference::System);
}
