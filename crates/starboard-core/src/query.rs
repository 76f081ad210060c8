//! Lookup helpers over star collections.

use crate::star::Star;

/// Finds the first star whose name matches, ignoring case.
pub fn find_by_name<'a>(stars: &'a [Star], name: &str) -> Option<&'a Star> {
    stars.iter().find(|s| s.name_matches(name))
}

/// Finds a star by slug id or case-insensitive name.
///
/// The slug is tried first so that id-keyed callers keep working; names
/// are the canonical identity.
pub fn find_star<'a>(stars: &'a [Star], identifier: &str) -> Option<&'a Star> {
    stars
        .iter()
        .find(|s| s.id == identifier)
        .or_else(|| find_by_name(stars, identifier))
}

/// Index variant of [`find_star`], for in-place mutation.
pub fn find_star_index(stars: &[Star], identifier: &str) -> Option<usize> {
    stars
        .iter()
        .position(|s| s.id == identifier)
        .or_else(|| stars.iter().position(|s| s.name_matches(identifier)))
}
