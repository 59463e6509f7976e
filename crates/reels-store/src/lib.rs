//! # reels-store
//!
//! Local persistence for the session core, backed by SQLite.
//!
//! The whole persisted surface is one JSON blob stored under a fixed key in
//! a two-column `kv` table. The crate exposes a synchronous [`Store`] handle
//! that wraps a `rusqlite::Connection`, plus the typed [`PersistedState`]
//! snapshot that crosses the boundary. Corrupt or missing data always loads
//! as "nothing to restore", never as an error.

pub mod database;
pub mod snapshot;

mod error;

pub use database::Store;
pub use error::{Result, StoreError};
pub use snapshot::PersistedState;
