//! Contribution kind enum.
//!
//! Serialized as a plain string so that hand-edited data files keep
//! working: known kinds round-trip to their canonical form, anything
//! else is preserved verbatim as `Custom`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The kind of a contribution (where the link points).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContributionKind {
    YouTube,
    Medium,
    LinkedIn,
    Substack,
    MeetupsEvents,
    OpenSource,
    Other,
    /// Any unrecognized kind string, preserved as-is.
    Custom(String),
}

impl ContributionKind {
    /// Returns the canonical string representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::YouTube => "youtube",
            Self::Medium => "medium",
            Self::LinkedIn => "linkedin",
            Self::Substack => "substack",
            Self::MeetupsEvents => "meetups/events",
            Self::OpenSource => "open source",
            Self::Other => "other",
            Self::Custom(s) => s.as_str(),
        }
    }

    /// Returns `true` if this is a built-in (non-custom) kind.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// All built-in kinds, in display order.
    pub fn builtin() -> &'static [ContributionKind] {
        &[
            Self::YouTube,
            Self::Medium,
            Self::LinkedIn,
            Self::Substack,
            Self::MeetupsEvents,
            Self::OpenSource,
            Self::Other,
        ]
    }
}

impl Default for ContributionKind {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for ContributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ContributionKind {
    fn from(s: &str) -> Self {
        // Accept the spelling variants older data files used.
        match s.to_lowercase().as_str() {
            "youtube" => Self::YouTube,
            "medium" => Self::Medium,
            "linkedin" => Self::LinkedIn,
            "substack" => Self::Substack,
            "meetups/events" | "meetups" | "events" => Self::MeetupsEvents,
            "open source" | "opensource" | "open-source" => Self::OpenSource,
            "other" => Self::Other,
            _ => Self::Custom(s.to_owned()),
        }
    }
}

impl From<String> for ContributionKind {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for ContributionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContributionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_kinds() {
        assert_eq!(ContributionKind::from("youtube"), ContributionKind::YouTube);
        assert_eq!(ContributionKind::from("YouTube"), ContributionKind::YouTube);
        assert_eq!(
            ContributionKind::from("meetups"),
            ContributionKind::MeetupsEvents
        );
        assert_eq!(
            ContributionKind::from("events"),
            ContributionKind::MeetupsEvents
        );
        assert_eq!(
            ContributionKind::from("opensource"),
            ContributionKind::OpenSource
        );
    }

    #[test]
    fn unknown_kind_preserved() {
        let kind = ContributionKind::from("podcast");
        assert_eq!(kind, ContributionKind::Custom("podcast".into()));
        assert_eq!(kind.as_str(), "podcast");
        assert!(!kind.is_builtin());
    }

    #[test]
    fn serde_roundtrip_as_string() {
        let json = serde_json::to_string(&ContributionKind::MeetupsEvents).unwrap();
        assert_eq!(json, "\"meetups/events\"");
        let back: ContributionKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ContributionKind::MeetupsEvents);
    }
}
