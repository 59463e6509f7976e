//! Domain model structs for the session state.
//!
//! Every struct derives `Serialize` and `Deserialize` with camelCase keys so
//! it round-trips through the persisted JSON blob unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Plan, ProcessStatus, VideoStatus};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// The signed-in account. At most one instance per session; replaced
/// wholesale on profile edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    /// Optional avatar image tag.
    #[serde(default)]
    pub avatar: Option<String>,
    pub plan: Plan,
    pub created_at: DateTime<Utc>,
    pub stats: UserStats,
}

/// Aggregate account counters embedded in [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_views: u64,
    pub videos_created: u32,
    pub engagement_rate: f64,
    pub days_active: u32,
}

// ---------------------------------------------------------------------------
// Video
// ---------------------------------------------------------------------------

/// A video in the creator workspace. Id uniqueness is assumed on insert,
/// not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    /// Thumbnail tag, e.g. `gradient-3`.
    pub thumbnail: String,
    /// Duration in seconds.
    pub duration: u32,
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
    /// Names of the platforms this video has been published to.
    #[serde(rename = "platform")]
    pub platforms: Vec<String>,
    pub status: VideoStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// AI process
// ---------------------------------------------------------------------------

/// One AI tool run. Progress is fractional, 0–100, and must never decrease
/// once the record exists; `Completed` implies progress is exactly 100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiProcess {
    pub id: String,
    pub title: String,
    /// Display label of the tool that produced this run.
    pub tool: String,
    pub status: ProcessStatus,
    pub progress: f64,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// A publishing destination. The set of platforms is fixed at store
/// initialisation; only the `connected` flag and the display strings change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Gradient color token consumed by the UI layer.
    pub color: String,
    pub connected: bool,
    /// Follower count as a display string ("45.2K"), not a number.
    pub followers: String,
    pub engagement: String,
    #[serde(default)]
    pub last_post: Option<String>,
}

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// A content template. Static seed data, never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub title: String,
    pub category: String,
    pub thumbnail: String,
    pub likes: u32,
    pub downloads: u32,
    pub is_new: bool,
    pub is_pro: bool,
    pub description: String,
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

/// One overwritable analytics snapshot. Nothing in the store computes these
/// incrementally from the video collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_views: u64,
    pub total_engagement: u64,
    pub total_shares: u64,
    pub total_downloads: u64,
    pub views_change: String,
    pub engagement_change: String,
    pub shares_change: String,
    pub downloads_change: String,
    pub top_videos: Vec<TopVideo>,
    pub platform_stats: Vec<PlatformStat>,
}

impl Default for Analytics {
    fn default() -> Self {
        Self {
            total_views: 0,
            total_engagement: 0,
            total_shares: 0,
            total_downloads: 0,
            views_change: "+0%".into(),
            engagement_change: "+0%".into(),
            shares_change: "+0%".into(),
            downloads_change: "+0%".into(),
            top_videos: Vec::new(),
            platform_stats: Vec::new(),
        }
    }
}

/// A ranked video inside an [`Analytics`] snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopVideo {
    pub title: String,
    pub views: String,
    pub engagement: String,
    pub platform: String,
}

/// Per-platform view totals inside an [`Analytics`] snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStat {
    pub platform: String,
    pub views: String,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn models_use_camel_case_keys() {
        let video = Video {
            id: "v1".into(),
            title: "clip".into(),
            thumbnail: "gradient-1".into(),
            duration: 42,
            views: 0,
            likes: 0,
            shares: 0,
            platforms: vec!["tiktok".into()],
            status: VideoStatus::Draft,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&video).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["platform"][0], "tiktok");
        assert_eq!(json["status"], "draft");
    }

    #[test]
    fn plan_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Plan::Pro).unwrap(), "\"pro\"");
        assert_eq!(
            serde_json::from_str::<Plan>("\"enterprise\"").unwrap(),
            Plan::Enterprise
        );
    }

    #[test]
    fn analytics_default_is_zeroed() {
        let analytics = Analytics::default();
        assert_eq!(analytics.total_views, 0);
        assert_eq!(analytics.views_change, "+0%");
        assert!(analytics.top_videos.is_empty());
    }
}
