//! The persisted subset of the session state.
//!
//! Only durable session data is mirrored: the signed-in user, the video and
//! AI-process collections, platform connections and the last analytics
//! snapshot. Transient flags (loading, error) and the static template
//! catalogue are never written.

use serde::{Deserialize, Serialize};
use tracing::warn;

use reels_shared::constants::PERSIST_KEY;
use reels_shared::models::{AiProcess, Analytics, Platform, User, Video};

use crate::database::Store;
use crate::error::Result;

/// The JSON blob stored under [`PERSIST_KEY`].
///
/// Every field is optional so blobs written by older sessions load cleanly;
/// absent fields leave the in-memory default untouched on merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    pub user: Option<User>,
    pub videos: Option<Vec<Video>>,
    pub ai_processes: Option<Vec<AiProcess>>,
    pub platforms: Option<Vec<Platform>>,
    pub analytics: Option<Analytics>,
}

impl Store {
    /// Load the persisted session blob.
    ///
    /// Missing, unreadable or corrupt data all degrade to `None`; startup
    /// must never fail because of a bad blob.
    pub fn load_state(&self) -> Option<PersistedState> {
        let raw = match self.get_raw(PERSIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, "failed to read persisted state; starting fresh");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!(error = %err, "persisted state is corrupt; starting fresh");
                None
            }
        }
    }

    /// Serialize and write the full persisted subset.
    ///
    /// Called on every state change; the blob is rewritten wholesale, no
    /// diffing.
    pub fn save_state(&self, state: &PersistedState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        self.put_raw(PERSIST_KEY, &json)
    }
}
