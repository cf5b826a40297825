//! `document.cookie` string handling for the theme cookie.
//!
//! Writes are a single `Set-Cookie`-style assignment string; reads scan the
//! `name=value; name=value` list the browser hands back. Values are
//! percent-encoded on write and decoded on read.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use crate::config::{SameSite, ThemeConfig};

/// Build the assignment string for `document.cookie = ...`.
///
/// `SameSite=None` is only accepted by browsers together with `Secure`.
#[must_use]
pub fn format_assignment(config: &ThemeConfig, value: &str) -> String {
    let mut assignment = format!(
        "{}={}; max-age={}; path={}; SameSite={}",
        config.cookie_name,
        urlencoding::encode(value),
        config.max_age_secs(),
        config.cookie_path,
        config.same_site,
    );
    if config.same_site == SameSite::None {
        assignment.push_str("; Secure");
    }
    assignment
}

/// Find `name` in a `document.cookie` string and return its decoded value.
///
/// The first matching pair wins. A value that fails to decode is treated
/// as absent.
#[must_use]
pub fn lookup(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .and_then(|(_, raw)| urlencoding::decode(raw.trim()).ok())
        .map(std::borrow::Cow::into_owned)
}

/// Split an assignment string into `(name, raw value, max-age)`.
///
/// Attribute names are matched case-insensitively. Used by the in-memory
/// jar to honor the same strings the browser receives.
#[must_use]
pub fn parse_assignment(assignment: &str) -> Option<(String, String, Option<i64>)> {
    let mut parts = assignment.split(';');
    let (name, value) = parts.next()?.trim().split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let max_age = parts
        .filter_map(|attr| attr.trim().split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("max-age"))
        .and_then(|(_, v)| v.trim().parse::<i64>().ok());
    Some((name.to_owned(), value.trim().to_owned(), max_age))
}
