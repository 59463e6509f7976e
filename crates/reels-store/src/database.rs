//! Database connection management.
//!
//! The [`Store`] struct owns a [`rusqlite::Connection`] and guarantees the
//! `kv` schema exists before any other operation. Values are opaque JSON
//! strings keyed by name; the typed snapshot helpers live in
//! [`crate::snapshot`].

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreError};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS kv (
    key  TEXT PRIMARY KEY,
    json TEXT NOT NULL
);";

/// Wrapper around a [`rusqlite::Connection`].
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/reels/reels.db`
    /// - macOS:   `~/Library/Application Support/com.thereelsapp.reels/reels.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\thereelsapp\reels\data\reels.db`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("com", "thereelsapp", "reels").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("reels.db");

        tracing::info!(path = %db_path.display(), "opening database");

        Self::open_at(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    ///
    /// This is useful for tests and for embedding the store inside custom
    /// directory layouts.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Recommended SQLite settings.
        conn.pragma_update(None, "journal_mode", "WAL")?;

        conn.execute_batch(SCHEMA)?;

        Ok(Self { conn })
    }

    /// Open an in-memory database. Contents are lost when the handle drops.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Fetch the raw JSON string stored under `key`, if any.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT json FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Store `json` under `key`, replacing any previous value.
    pub fn put_raw(&self, key: &str, json: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, json) VALUES (?1, ?2)",
            params![key, json],
        )?;
        Ok(())
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }
}
