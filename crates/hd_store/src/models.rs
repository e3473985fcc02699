//! Database row models — these map to/from SQL rows.

use serde::{Deserialize, Serialize};

/// Default per-user quota: 512 MiB, in bytes.
pub const DEFAULT_QUOTA_BYTES: i64 = 536_870_912;

/// A row of the `user` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    /// Globally unique login name.
    pub username: String,
    /// Storage quota in bytes (defaults to [`DEFAULT_QUOTA_BYTES`]).
    pub quota: i64,
    /// Base64-encoded SPKI public key of the account.
    pub public_key: String,
    /// Cumulative stored bytes; kept `<= quota` by a CHECK constraint.
    pub utilized_space: i64,
}

/// A row of the `files` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FileRow {
    pub id: i64,
    /// References `user.id` (enforced — connections enable foreign keys).
    pub owner: i64,
    /// Hex-encoded SHA-256 of the file body.
    pub hash: String,
    /// Size in bytes.
    pub size: i64,
}
