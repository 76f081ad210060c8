//! Slug id generation from star names.

/// Derives a slug id from a display name.
///
/// Lowercases the name, turns spaces into underscores, and drops every
/// character outside `[a-z0-9_]`. Two names that case-fold equal always
/// produce the same slug.
pub fn slug_from_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}
