//! SQLite persistence layer
//!
//! `init` owns pool creation and schema setup; `groups` is the repository
//! over the `groups` table and its child collection tables.

mod init;
pub mod groups;

pub use init::{init_database, init_memory_database};
