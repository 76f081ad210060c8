//! Storage backend for the starboard system.
//!
//! Provides the [`StarStore`] trait and a JSON file implementation
//! ([`JsonStore`]).

pub mod error;
pub mod json_store;
pub mod traits;

// Re-exports for convenience.
pub use error::StorageError;
pub use json_store::JsonStore;
pub use traits::StarStore;

// ---------------------------------------------------------------------------
// StarStore trait implementation for JsonStore
// ---------------------------------------------------------------------------

use starboard_core::star::{Contribution, Star};

use crate::error::Result;

impl StarStore for JsonStore {
    fn load(&self) -> Vec<Star> {
        self.load_impl()
    }

    fn save(&self, stars: &[Star]) -> Result<()> {
        self.save_impl(stars)
    }

    fn upsert(&self, star: Star) -> Result<bool> {
        self.upsert_impl(star)
    }

    fn delete(&self, identifier: &str) -> Result<bool> {
        self.delete_impl(identifier)
    }

    fn get(&self, identifier: &str) -> Option<Star> {
        self.get_impl(identifier)
    }

    fn add_contribution(&self, identifier: &str, contribution: Contribution) -> Result<()> {
        self.add_contribution_impl(identifier, contribution)
    }

    fn remove_contribution(&self, identifier: &str, index: usize) -> Result<Contribution> {
        self.remove_contribution_impl(identifier, index)
    }
}
