//! The in-memory session snapshot.
//!
//! [`AppState`] is the single source of truth for the signed-in user, the
//! video and AI-process collections, platform connections and analytics.
//! It is only ever replaced wholesale by the reducer; see [`crate::reducer`].

use reels_shared::models::{AiProcess, Analytics, Platform, Template, User, Video};
use reels_shared::seed;

/// Central session state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The signed-in account. `None` until login or signup completes.
    pub user: Option<User>,

    /// Videos in the creator workspace, in insertion order.
    pub videos: Vec<Video>,

    /// The static template catalogue. Seeded once, never mutated, never
    /// persisted.
    pub templates: Vec<Template>,

    /// AI tool runs, in insertion order.
    pub ai_processes: Vec<AiProcess>,

    /// The fixed set of publishing platforms.
    pub platforms: Vec<Platform>,

    /// The last analytics snapshot.
    pub analytics: Analytics,

    /// Whether a service call is in flight.
    pub is_loading: bool,

    /// The last surfaced error message, if any.
    pub error: Option<String>,
}

impl AppState {
    /// A fresh session: no user, empty collections, seeded templates and
    /// platforms, zeroed analytics.
    pub fn initial() -> Self {
        Self {
            user: None,
            videos: Vec::new(),
            templates: seed::default_templates(),
            ai_processes: Vec::new(),
            platforms: seed::default_platforms(),
            analytics: Analytics::default(),
            is_loading: false,
            error: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial()
    }
}
