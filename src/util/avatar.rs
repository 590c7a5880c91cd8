//! Avatar display fallbacks.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

/// Initials shown when a user has no avatar image: the first two
/// characters of the name, uppercased.
///
/// A missing or empty name resolves to a fixed glyph rather than a
/// runtime fault — request records are not trusted to carry a name.
pub fn avatar_initials(name: Option<&str>) -> String {
    let initials: String = name
        .map(str::trim)
        .unwrap_or("")
        .chars()
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        "?".to_owned()
    } else {
        initials
    }
}
