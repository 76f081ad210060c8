//! Star struct -- the central domain model for the starboard system.

use serde::{Deserialize, Serialize};

use crate::kinds::ContributionKind;
use crate::slug;

/// Helper for `skip_serializing_if` on `Vec` fields.
fn is_empty_vec<T>(v: &Vec<T>) -> bool {
    v.is_empty()
}

/// A tracked contributor profile.
///
/// The canonical identity is the case-folded `name`; `id` is a slug
/// derived from the name, kept for stable references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Star {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bio: String,

    #[serde(default, skip_serializing_if = "is_empty_vec")]
    pub contributions: Vec<Contribution>,
}

/// A single dated, typed, linked piece of content attributed to a star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Contribution {
    #[serde(default, rename = "type")]
    pub kind: ContributionKind,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub url: String,

    /// Month key in `"YYYY-MM"` form.
    #[serde(default)]
    pub month: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Star {
    /// Returns `true` if this star's name matches the given name,
    /// ignoring case.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Fills in the slug id from the name if it is missing.
    pub fn ensure_id(&mut self) {
        if self.id.is_empty() {
            self.id = slug::slug_from_name(&self.name);
        }
    }
}

/// Builder for constructing a [`Star`] with a fluent API.
pub struct StarBuilder {
    star: Star,
}

impl StarBuilder {
    /// Creates a new builder with the given name. The slug id is derived
    /// from the name.
    pub fn new(name: impl Into<String>) -> Self {
        let mut star = Star {
            name: name.into(),
            ..Star::default()
        };
        star.ensure_id();
        Self { star }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.star.id = id.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.star.role = role.into();
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.star.bio = bio.into();
        self
    }

    pub fn contribution(mut self, contribution: Contribution) -> Self {
        self.star.contributions.push(contribution);
        self
    }

    pub fn contributions(mut self, contributions: Vec<Contribution>) -> Self {
        self.star.contributions = contributions;
        self
    }

    /// Consumes the builder and returns the constructed [`Star`].
    pub fn build(self) -> Star {
        self.star
    }
}
