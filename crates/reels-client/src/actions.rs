//! The closed set of state transitions.
//!
//! Every mutation of [`crate::state::AppState`] is expressed as one of these
//! variants and applied by [`crate::reducer::reduce`]. Partial updates carry
//! a patch type whose `Some` fields are merged into the matching record.

use chrono::{DateTime, Utc};

use reels_shared::models::{AiProcess, User, Video};
use reels_shared::types::{ProcessStatus, VideoStatus};
use reels_store::PersistedState;

/// A state transition request.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the signed-in user (login, signup, profile edit, logout).
    SetUser(Option<User>),
    /// Append a video. Id uniqueness is assumed, not enforced.
    AddVideo(Video),
    /// Merge patch fields into the video with the given id; no-op if absent.
    UpdateVideo { id: String, patch: VideoPatch },
    /// Remove the video with the given id; no-op if absent.
    DeleteVideo(String),
    /// Append an AI process record.
    AddAiProcess(AiProcess),
    /// Merge patch fields into the process with the given id; no-op if absent.
    UpdateAiProcess { id: String, patch: ProcessPatch },
    /// Flip the `connected` flag of the platform with the given id.
    TogglePlatform(String),
    /// Replace the loading flag.
    SetLoading(bool),
    /// Replace the error message.
    SetError(Option<String>),
    /// Shallow-merge a persisted snapshot, field by field. Used once at
    /// startup and by the analytics refresh flow.
    LoadData(PersistedState),
}

/// Partial update of a [`Video`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<u32>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub shares: Option<u64>,
    pub platforms: Option<Vec<String>>,
    pub status: Option<VideoStatus>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl VideoPatch {
    pub fn apply(&self, video: &mut Video) {
        if let Some(title) = &self.title {
            video.title = title.clone();
        }
        if let Some(thumbnail) = &self.thumbnail {
            video.thumbnail = thumbnail.clone();
        }
        if let Some(duration) = self.duration {
            video.duration = duration;
        }
        if let Some(views) = self.views {
            video.views = views;
        }
        if let Some(likes) = self.likes {
            video.likes = likes;
        }
        if let Some(shares) = self.shares {
            video.shares = shares;
        }
        if let Some(platforms) = &self.platforms {
            video.platforms = platforms.clone();
        }
        if let Some(status) = self.status {
            video.status = status;
        }
        if let Some(updated_at) = self.updated_at {
            video.updated_at = updated_at;
        }
    }
}

/// Partial update of an [`AiProcess`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessPatch {
    pub title: Option<String>,
    pub tool: Option<String>,
    pub status: Option<ProcessStatus>,
    pub progress: Option<f64>,
}

impl ProcessPatch {
    pub fn apply(&self, process: &mut AiProcess) {
        if let Some(title) = &self.title {
            process.title = title.clone();
        }
        if let Some(tool) = &self.tool {
            process.tool = tool.clone();
        }
        if let Some(status) = self.status {
            process.status = status;
        }
        if let Some(progress) = self.progress {
            process.progress = progress;
        }
    }
}
