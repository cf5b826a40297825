use super::*;

// =============================================================
// format_assignment
// =============================================================

#[test]
fn assignment_carries_year_long_site_wide_lax_attributes() {
    let cfg = ThemeConfig::default();
    assert_eq!(format_assignment(&cfg, "dark"), "theme=dark; max-age=31536000; path=/; SameSite=Lax");
}

#[test]
fn assignment_percent_encodes_value() {
    let cfg = ThemeConfig::default();
    assert_eq!(
        format_assignment(&cfg, "a b;c"),
        "theme=a%20b%3Bc; max-age=31536000; path=/; SameSite=Lax"
    );
}

#[test]
fn assignment_follows_config_overrides() {
    let cfg = ThemeConfig {
        cookie_name: "site_theme".into(),
        cookie_path: "/blog".into(),
        max_age_days: 1,
        same_site: SameSite::Strict,
        ..ThemeConfig::default()
    };
    assert_eq!(format_assignment(&cfg, "light"), "site_theme=light; max-age=86400; path=/blog; SameSite=Strict");
}

#[test]
fn same_site_none_cookie_is_marked_secure() {
    let cfg = ThemeConfig { same_site: SameSite::None, ..ThemeConfig::default() };
    assert_eq!(
        format_assignment(&cfg, "dark"),
        "theme=dark; max-age=31536000; path=/; SameSite=None; Secure"
    );
}

#[test]
fn secure_is_only_added_for_same_site_none() {
    for same_site in [SameSite::Strict, SameSite::Lax] {
        let cfg = ThemeConfig { same_site, ..ThemeConfig::default() };
        assert!(!format_assignment(&cfg, "dark").contains("Secure"), "{same_site}");
    }
}

// =============================================================
// lookup
// =============================================================

#[test]
fn lookup_finds_value_among_other_cookies() {
    assert_eq!(lookup("session=abc; theme=dark; other=1", "theme"), Some("dark".into()));
}

#[test]
fn lookup_does_not_match_name_prefixes() {
    assert_eq!(lookup("theme_old=dark; xtheme=light", "theme"), None);
}

#[test]
fn lookup_decodes_percent_encoding() {
    assert_eq!(lookup("theme=sys%74em", "theme"), Some("system".into()));
}

#[test]
fn lookup_treats_undecodable_value_as_absent() {
    assert_eq!(lookup("theme=%FF%FE", "theme"), None);
}

#[test]
fn lookup_handles_empty_and_garbage_input() {
    assert_eq!(lookup("", "theme"), None);
    assert_eq!(lookup(";;; =;novalue", "theme"), None);
}

#[test]
fn lookup_returns_first_match() {
    assert_eq!(lookup("theme=light; theme=dark", "theme"), Some("light".into()));
}

// =============================================================
// parse_assignment
// =============================================================

#[test]
fn parse_assignment_extracts_name_value_and_max_age() {
    let parsed = parse_assignment("theme=dark; max-age=31536000; path=/; SameSite=Lax");
    assert_eq!(parsed, Some(("theme".into(), "dark".into(), Some(31_536_000))));
}

#[test]
fn parse_assignment_without_max_age() {
    assert_eq!(parse_assignment("theme=light"), Some(("theme".into(), "light".into(), None)));
}

#[test]
fn parse_assignment_rejects_missing_name() {
    assert_eq!(parse_assignment("=dark"), None);
    assert_eq!(parse_assignment("nothing"), None);
}
