//! hd_store — Hashdrop storage schema over SQLite
//!
//! Declarative schema for the two Hashdrop record types:
//! - `user`  — account identity: unique username, byte quota, SPKI public
//!   key, cumulative utilized space
//! - `files` — stored content: owning user, SHA-256 content hash, size
//!
//! The schema itself lives in `migrations/` and is applied by
//! [`Store::open`]. Quota accounting and upload handling belong to the
//! application layer; the database enforces the structural constraints
//! (username uniqueness, column defaults, the `files.owner` foreign key,
//! and `utilized_space <= quota`).

pub mod db;
pub mod error;
pub mod models;

pub use db::Store;
pub use error::StoreError;
pub use models::{FileRow, UserRow, DEFAULT_QUOTA_BYTES};
