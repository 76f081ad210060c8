//! Command handlers for the `sb` CLI.

pub mod add;
pub mod completion;
pub mod contrib;
pub mod delete;
pub mod init;
pub mod list;
pub mod show;
pub mod stats;
pub mod version;
