//! The storage trait boundary.

use starboard_core::star::{Contribution, Star};

use crate::error::Result;

/// Storage interface for star collections.
///
/// Every mutation is a synchronous read-modify-write of the entire
/// collection: load, change in memory, rewrite the file. That is the
/// intended model for a single-admin tool tracking dozens of records.
pub trait StarStore {
    /// Loads the full ordered collection.
    ///
    /// A missing or unparsable backing file yields an empty collection,
    /// never an error.
    fn load(&self) -> Vec<Star>;

    /// Overwrites the backing file with the full collection.
    fn save(&self, stars: &[Star]) -> Result<()>;

    /// Inserts or updates a star, keyed by case-insensitive name.
    ///
    /// When updating, the existing record's contributions are preserved
    /// if the incoming record carries none. Returns `true` if an
    /// existing record was replaced, `false` if a new one was appended.
    fn upsert(&self, star: Star) -> Result<bool>;

    /// Removes stars matching the identifier by slug id or
    /// case-insensitive name. Returns `true` if anything was removed.
    fn delete(&self, identifier: &str) -> Result<bool>;

    /// Looks up a single star by slug id or case-insensitive name.
    fn get(&self, identifier: &str) -> Option<Star>;

    /// Appends a contribution to the identified star.
    fn add_contribution(&self, identifier: &str, contribution: Contribution) -> Result<()>;

    /// Removes a contribution by index from the identified star,
    /// returning the removed record.
    fn remove_contribution(&self, identifier: &str, index: usize) -> Result<Contribution>;
}
