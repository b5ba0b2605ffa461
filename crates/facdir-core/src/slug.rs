//! URL slug helpers.

/// Build a facility slug from its name, city and optional state abbreviation.
///
/// Non-ASCII characters are dropped, every other run of non-alphanumeric
/// characters becomes a single `-`, and leading/trailing dashes are trimmed.
#[must_use]
pub fn facility_slug(name: &str, city: &str, state_abbr: Option<&str>) -> String {
    let base = match state_abbr {
        Some(abbr) if !abbr.trim().is_empty() => format!("{name}-{city}-{abbr}"),
        _ => format!("{name}-{city}"),
    };

    base.to_lowercase()
        .chars()
        .filter(char::is_ascii)
        .collect::<String>()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Slug for states, cities and type labels: lowercase, whitespace to `-`,
/// anything outside `[a-z0-9-]` removed.
#[must_use]
pub fn simple_slug(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}
