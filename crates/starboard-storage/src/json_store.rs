//! JSON file implementation of the star store.
//!
//! The backing file is a single pretty-printed JSON array of stars.
//! There is no locking and no atomic rename; concurrent writers race and
//! the last save wins. A single interactive admin session is the
//! expected usage.

use std::fs;
use std::path::{Path, PathBuf};

use starboard_core::query::{find_star, find_star_index};
use starboard_core::star::{Contribution, Star};

use crate::error::{Result, StorageError};

/// The default name of the backing file inside the data directory.
pub const STARS_FILE: &str = "stars.json";

/// Star store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store for `stars.json` inside the given data directory.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STARS_FILE),
        }
    }

    /// Creates a store for an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn load_impl(&self) -> Vec<Star> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        let mut stars: Vec<Star> = match serde_json::from_str(&content) {
            Ok(stars) => stars,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "backing file is not a valid star collection, treating as empty"
                );
                return Vec::new();
            }
        };

        // Older data files may predate slug ids.
        for star in &mut stars {
            star.ensure_id();
        }
        stars
    }

    pub(crate) fn save_impl(&self, stars: &[Star]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(stars)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), count = stars.len(), "collection saved");
        Ok(())
    }

    pub(crate) fn upsert_impl(&self, mut star: Star) -> Result<bool> {
        star.ensure_id();

        let mut stars = self.load_impl();
        let existing = stars.iter().position(|s| s.name_matches(&star.name));

        let updated = match existing {
            Some(index) => {
                // An upsert without contributions edits the profile only.
                if star.contributions.is_empty() {
                    star.contributions = std::mem::take(&mut stars[index].contributions);
                }
                stars[index] = star;
                true
            }
            None => {
                stars.push(star);
                false
            }
        };

        self.save_impl(&stars)?;
        Ok(updated)
    }

    pub(crate) fn delete_impl(&self, identifier: &str) -> Result<bool> {
        let mut stars = self.load_impl();
        let before = stars.len();
        stars.retain(|s| s.id != identifier && !s.name_matches(identifier));

        if stars.len() == before {
            return Ok(false);
        }
        self.save_impl(&stars)?;
        Ok(true)
    }

    pub(crate) fn get_impl(&self, identifier: &str) -> Option<Star> {
        let stars = self.load_impl();
        find_star(&stars, identifier).cloned()
    }

    pub(crate) fn add_contribution_impl(
        &self,
        identifier: &str,
        contribution: Contribution,
    ) -> Result<()> {
        let mut stars = self.load_impl();
        let index = find_star_index(&stars, identifier)
            .ok_or_else(|| StorageError::not_found("star", identifier))?;

        stars[index].contributions.push(contribution);
        self.save_impl(&stars)
    }

    pub(crate) fn remove_contribution_impl(
        &self,
        identifier: &str,
        contribution_index: usize,
    ) -> Result<Contribution> {
        let mut stars = self.load_impl();
        let index = find_star_index(&stars, identifier)
            .ok_or_else(|| StorageError::not_found("star", identifier))?;

        if contribution_index >= stars[index].contributions.len() {
            return Err(StorageError::not_found(
                "contribution",
                contribution_index.to_string(),
            ));
        }
        let removed = stars[index].contributions.remove(contribution_index);
        self.save_impl(&stars)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StarStore;
    use pretty_assertions::assert_eq;
    use starboard_core::kinds::ContributionKind;
    use starboard_core::star::StarBuilder;
    use tempfile::TempDir;

    fn store() -> (TempDir, JsonStore) {
        let tmp = TempDir::new().unwrap();
        let store = JsonStore::new(tmp.path());
        (tmp, store)
    }

    fn talk(month: &str) -> Contribution {
        Contribution {
            kind: ContributionKind::YouTube,
            title: "Talk".into(),
            url: "https://youtu.be/abc".into(),
            month: month.into(),
            description: String::new(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_tmp, store) = store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let (tmp, store) = store();
        fs::write(tmp.path().join(STARS_FILE), "{not json!").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_load_roundtrip() {
        let (_tmp, store) = store();
        let stars = vec![
            StarBuilder::new("Ada").role("Engineer").build(),
            StarBuilder::new("Grace").contribution(talk("2024-05")).build(),
        ];
        store.save(&stars).unwrap();
        assert_eq!(store.load(), stars);

        // save(load()) is idempotent.
        store.save(&store.load()).unwrap();
        assert_eq!(store.load(), stars);
    }

    #[test]
    fn upsert_appends_new_star() {
        let (_tmp, store) = store();
        let updated = store.upsert(StarBuilder::new("Ada").build()).unwrap();
        assert!(!updated);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn upsert_replaces_case_insensitively() {
        let (_tmp, store) = store();
        store.upsert(StarBuilder::new("Ada").role("Old").build()).unwrap();

        let updated = store
            .upsert(StarBuilder::new("ada").role("X").build())
            .unwrap();
        assert!(updated);

        let stars = store.load();
        assert_eq!(stars.len(), 1, "no duplicate for case-variant name");
        assert_eq!(stars[0].name, "ada");
        assert_eq!(stars[0].role, "X");
    }

    #[test]
    fn upsert_preserves_contributions_when_omitted() {
        let (_tmp, store) = store();
        store
            .upsert(StarBuilder::new("Ada").contribution(talk("2024-05")).build())
            .unwrap();

        store
            .upsert(StarBuilder::new("Ada").role("Updated").build())
            .unwrap();

        let ada = store.get("ada").unwrap();
        assert_eq!(ada.role, "Updated");
        assert_eq!(ada.contributions.len(), 1, "contributions survive profile edits");
    }

    #[test]
    fn upsert_with_contributions_replaces_them() {
        let (_tmp, store) = store();
        store
            .upsert(StarBuilder::new("Ada").contribution(talk("2024-05")).build())
            .unwrap();
        store
            .upsert(
                StarBuilder::new("Ada")
                    .contribution(talk("2024-06"))
                    .contribution(talk("2024-07"))
                    .build(),
            )
            .unwrap();

        assert_eq!(store.get("Ada").unwrap().contributions.len(), 2);
    }

    #[test]
    fn delete_by_name_or_slug() {
        let (_tmp, store) = store();
        store.upsert(StarBuilder::new("Ada Lovelace").build()).unwrap();
        store.upsert(StarBuilder::new("Grace Hopper").build()).unwrap();

        assert!(store.delete("ada_lovelace").unwrap());
        assert!(store.get("Ada Lovelace").is_none());

        assert!(store.delete("GRACE HOPPER").unwrap());
        assert!(store.load().is_empty());
    }

    #[test]
    fn delete_unknown_is_not_found_result() {
        let (_tmp, store) = store();
        store.upsert(StarBuilder::new("Ada").build()).unwrap();
        assert!(!store.delete("nobody").unwrap());
        assert_eq!(store.load().len(), 1, "other records untouched");
    }

    #[test]
    fn contribution_add_and_remove() {
        let (_tmp, store) = store();
        store.upsert(StarBuilder::new("Ada").build()).unwrap();

        store.add_contribution("Ada", talk("2024-05")).unwrap();
        store.add_contribution("ada", talk("2024-06")).unwrap();
        assert_eq!(store.get("Ada").unwrap().contributions.len(), 2);

        let removed = store.remove_contribution("Ada", 0).unwrap();
        assert_eq!(removed.month, "2024-05");
        assert_eq!(store.get("Ada").unwrap().contributions.len(), 1);
    }

    #[test]
    fn contribution_errors_are_not_found() {
        let (_tmp, store) = store();
        store.upsert(StarBuilder::new("Ada").build()).unwrap();

        let err = store.add_contribution("nobody", talk("2024-05")).unwrap_err();
        assert!(err.is_not_found());

        let err = store.remove_contribution("Ada", 5).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn load_backfills_missing_slugs() {
        let (tmp, store) = store();
        fs::write(
            tmp.path().join(STARS_FILE),
            r#"[{"name":"Ada Lovelace","role":"Engineer"}]"#,
        )
        .unwrap();

        let stars = store.load();
        assert_eq!(stars[0].id, "ada_lovelace");
    }
}
