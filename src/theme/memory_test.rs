use std::cell::Cell;

use super::*;

// =============================================================
// MemoryCookieJar
// =============================================================

#[test]
fn cookie_jar_applies_assignment_and_decodes_on_read() {
    let jar = MemoryCookieJar::default();
    jar.write("theme=sys%74em; max-age=60; path=/").unwrap();
    assert_eq!(jar.value("theme"), Some("system".into()));
    assert_eq!(jar.read_all().unwrap(), "theme=sys%74em");
    assert_eq!(jar.writes().len(), 1);
}

#[test]
fn cookie_jar_expires_on_non_positive_max_age() {
    let jar = MemoryCookieJar::default();
    jar.insert("theme", "dark");
    jar.write("theme=; max-age=0").unwrap();
    assert_eq!(jar.value("theme"), None);
}

#[test]
fn cookie_jar_rejects_malformed_assignment() {
    let jar = MemoryCookieJar::default();
    assert!(matches!(jar.write("no-equals-sign"), Err(ThemeError::Host(_))));
    assert!(jar.writes().is_empty());
}

#[test]
fn cookie_jar_reports_unavailable() {
    let jar = MemoryCookieJar::default();
    jar.set_unavailable(true);
    assert_eq!(jar.read_all(), Err(ThemeError::Unavailable { what: "cookies" }));
    assert!(jar.write("theme=dark").is_err());
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn store_set_get_remove() {
    let store = MemoryStore::default();
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme").unwrap(), Some("dark".into()));
    store.remove("theme").unwrap();
    assert_eq!(store.get("theme").unwrap(), None);
    assert!(store.snapshot().is_empty());
}

#[test]
fn store_reports_unavailable() {
    let store = MemoryStore::default();
    store.set_unavailable(true);
    assert!(store.get("theme").is_err());
    assert!(store.set("theme", "dark").is_err());
    assert!(store.remove("theme").is_err());
}

// =============================================================
// MemoryColorScheme
// =============================================================

#[test]
fn scheme_notifies_only_on_actual_change() {
    let scheme = MemoryColorScheme::new(false);
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let _sub = scheme.watch(Box::new(move |_| seen.set(seen.get() + 1))).unwrap();

    scheme.set_prefers_dark(false);
    assert_eq!(calls.get(), 0);
    scheme.set_prefers_dark(true);
    assert_eq!(calls.get(), 1);
    assert!(scheme.prefers_dark());
}

#[test]
fn dropping_subscription_deregisters_listener() {
    let scheme = MemoryColorScheme::new(false);
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let sub = scheme.watch(Box::new(move |_| seen.set(seen.get() + 1))).unwrap();
    assert_eq!(scheme.listener_count(), 1);

    drop(sub);
    assert_eq!(scheme.listener_count(), 0);
    scheme.set_prefers_dark(true);
    assert_eq!(calls.get(), 0);
}

// =============================================================
// MemoryDocument / MemoryHost
// =============================================================

#[test]
fn document_counts_flag_writes() {
    let doc = MemoryDocument::default();
    doc.set_dark(true).unwrap();
    doc.set_dark(true).unwrap();
    assert!(doc.is_dark());
    assert_eq!(doc.applies(), 2);
}

#[test]
fn host_env_shares_backends() {
    let host = MemoryHost::new(true);
    let env = host.env();
    env.local.set("k", "v").unwrap();
    assert_eq!(host.local.snapshot().get("k").map(String::as_str), Some("v"));
    assert!(env.scheme.prefers_dark());
}
