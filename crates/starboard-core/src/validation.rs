//! Star validation rules.
//!
//! Applied at the edit boundary (the CLI validates before persisting);
//! the store itself stays permissive so old data files always load.

use crate::linkcheck::link_is_valid;
use crate::month::looks_like_month_key;
use crate::star::Star;

/// Error type for validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,

    #[error("name must be 200 characters or less (got {0})")]
    NameTooLong(usize),

    #[error("contribution {index}: title is required")]
    ContributionTitleRequired { index: usize },

    #[error("contribution {index}: url '{url}' does not look like a {kind} link")]
    InvalidUrl {
        index: usize,
        kind: String,
        url: String,
    },

    #[error("contribution {index}: month '{month}' is not a YYYY-MM key")]
    BadMonthKey { index: usize, month: String },
}

/// Validates a star and all of its contributions.
pub fn validate_star(star: &Star) -> Result<(), ValidationError> {
    if star.name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if star.name.len() > 200 {
        return Err(ValidationError::NameTooLong(star.name.len()));
    }

    for (index, contribution) in star.contributions.iter().enumerate() {
        if contribution.title.trim().is_empty() {
            return Err(ValidationError::ContributionTitleRequired { index });
        }
        if !link_is_valid(&contribution.url, &contribution.kind) {
            return Err(ValidationError::InvalidUrl {
                index,
                kind: contribution.kind.to_string(),
                url: contribution.url.clone(),
            });
        }
        if !looks_like_month_key(&contribution.month) {
            return Err(ValidationError::BadMonthKey {
                index,
                month: contribution.month.clone(),
            });
        }
    }

    Ok(())
}
