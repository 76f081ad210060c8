//! Core types and validation for the starboard system.
//!
//! This crate contains the domain model (stars and their contributions)
//! plus the pure helpers the rest of the workspace builds on.

pub mod kinds;
pub mod linkcheck;
pub mod month;
pub mod query;
pub mod slug;
pub mod star;
pub mod validation;
