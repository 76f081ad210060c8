//! Configuration management for the starboard system.
//!
//! This crate handles loading and saving `.starboard/config.yaml` files,
//! discovering `.starboard/` directories in the filesystem, and resolving
//! the effective admin credentials.

pub mod board_dir;
pub mod config;
