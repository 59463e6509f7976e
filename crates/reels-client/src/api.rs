//! The mock remote-service layer.
//!
//! Every operation is an independent async call with a fixed artificial
//! latency and a canned or input-derived result. Nothing here touches the
//! session store; callers dispatch the results themselves (see
//! [`crate::commands`]). A real backend would replace this type while
//! keeping the same call surface.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use reels_shared::constants::{
    ANALYTICS_DELAY_MS, CONNECT_DELAY_MS, DEMO_EMAIL, DEMO_PASSWORD, DURATION_SPAN_SECS,
    LOGIN_DELAY_MS, MIN_DURATION_SECS, PROCESS_DELAY_MS, SIGNUP_DELAY_MS, THUMBNAIL_VARIANTS,
    UPLOAD_DELAY_MS,
};
use reels_shared::models::{
    AiProcess, Analytics, PlatformStat, TopVideo, User, UserStats, Video,
};
use reels_shared::types::{Plan, ProcessStatus, VideoStatus};

/// Errors produced by the service layer.
///
/// Bad credentials are the only failure in this version; every other
/// operation is defined never to fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Result of a platform connection attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<String>,
}

/// Tuning knobs for [`MockApi`].
#[derive(Debug, Clone, Copy)]
pub struct MockApiConfig {
    /// Apply the artificial per-operation latencies. Off in tests.
    pub latency: bool,
    /// Seed for the thumbnail/duration draws. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            latency: true,
            seed: None,
        }
    }
}

/// The mock service endpoint.
pub struct MockApi {
    config: MockApiConfig,
    rng: Mutex<StdRng>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::with_config(MockApiConfig::default())
    }

    /// A latency-free endpoint for tests and scripted runs.
    pub fn instant() -> Self {
        Self::with_config(MockApiConfig {
            latency: false,
            seed: None,
        })
    }

    pub fn with_config(config: MockApiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    async fn delay(&self, ms: u64) {
        if self.config.latency {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    /// Authenticate. Succeeds only for the demo credential pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.delay(LOGIN_DELAY_MS).await;

        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            return Ok(demo_user(email));
        }

        Err(ApiError::InvalidCredentials)
    }

    /// Create a fresh free-plan account. Never fails.
    pub async fn signup(&self, full_name: &str, email: &str, _password: &str) -> User {
        self.delay(SIGNUP_DELAY_MS).await;

        User {
            id: Uuid::new_v4().to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            avatar: None,
            plan: Plan::Free,
            created_at: Utc::now(),
            stats: UserStats {
                total_views: 0,
                videos_created: 0,
                engagement_rate: 0.0,
                days_active: 1,
            },
        }
    }

    /// "Upload" a video: the title is the file name without its extension,
    /// thumbnail and duration are drawn from the rng.
    pub async fn upload_video(&self, file_name: &str) -> Video {
        self.delay(UPLOAD_DELAY_MS).await;

        let (thumbnail, duration) = {
            let mut rng = lock_rng(&self.rng);
            (
                format!("gradient-{}", rng.gen_range(1..=THUMBNAIL_VARIANTS)),
                rng.gen_range(MIN_DURATION_SECS..MIN_DURATION_SECS + DURATION_SPAN_SECS),
            )
        };

        let now = Utc::now();
        Video {
            id: Uuid::new_v4().to_string(),
            title: strip_extension(file_name).to_string(),
            thumbnail,
            duration,
            views: 0,
            likes: 0,
            shares: 0,
            platforms: Vec::new(),
            status: VideoStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Start an AI tool run against a video. The record comes back already
    /// `Processing` at progress 0; the caller drives it from there.
    pub async fn process_with_ai(&self, video_id: &str, tool: &str) -> AiProcess {
        self.delay(PROCESS_DELAY_MS).await;

        AiProcess {
            id: Uuid::new_v4().to_string(),
            title: format!("Video {}", id_tail(video_id, 4)),
            tool: tool.to_string(),
            status: ProcessStatus::Processing,
            progress: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Connect a publishing platform. Always succeeds, with a canned
    /// follower count for the known platforms.
    pub async fn connect_platform(&self, platform_id: &str) -> ConnectResult {
        self.delay(CONNECT_DELAY_MS).await;

        let followers = match platform_id {
            "tiktok" => "45.2K",
            "instagram" => "32.1K",
            "youtube" => "12.8K",
            "twitter" => "8.9K",
            _ => "1K",
        };

        ConnectResult {
            success: true,
            followers: Some(followers.to_string()),
        }
    }

    /// Fetch the canned analytics snapshot.
    pub async fn get_analytics(&self) -> Analytics {
        self.delay(ANALYTICS_DELAY_MS).await;
        canned_analytics()
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_rng(rng: &Mutex<StdRng>) -> MutexGuard<'_, StdRng> {
    rng.lock().unwrap_or_else(PoisonError::into_inner)
}

fn demo_user(email: &str) -> User {
    User {
        id: "1".into(),
        full_name: "Alex Rodriguez".into(),
        email: email.to_string(),
        avatar: None,
        plan: Plan::Pro,
        created_at: Utc::now(),
        stats: UserStats {
            total_views: 2_400_000,
            videos_created: 156,
            engagement_rate: 6.8,
            days_active: 89,
        },
    }
}

fn canned_analytics() -> Analytics {
    Analytics {
        total_views: 2_400_000,
        total_engagement: 156_000,
        total_shares: 45_000,
        total_downloads: 89_000,
        views_change: "+12.5%".into(),
        engagement_change: "+8.2%".into(),
        shares_change: "+15.3%".into(),
        downloads_change: "+22.1%".into(),
        top_videos: vec![
            TopVideo {
                title: "Summer Vibes Tutorial".into(),
                views: "450K".into(),
                engagement: "92%".into(),
                platform: "TikTok".into(),
            },
            TopVideo {
                title: "AI Magic Reveal".into(),
                views: "380K".into(),
                engagement: "88%".into(),
                platform: "Instagram".into(),
            },
            TopVideo {
                title: "Quick Edit Tips".into(),
                views: "290K".into(),
                engagement: "85%".into(),
                platform: "YouTube".into(),
            },
        ],
        platform_stats: vec![
            PlatformStat {
                platform: "TikTok".into(),
                views: "1.2M".into(),
                color: "from-[#67c50a] to-[#7cd7c2]".into(),
            },
            PlatformStat {
                platform: "Instagram".into(),
                views: "890K".into(),
                color: "from-[#ffd900] to-[#67c50a]".into(),
            },
            PlatformStat {
                platform: "YouTube".into(),
                views: "310K".into(),
                color: "from-[#7cd7c2] to-[#054e6f]".into(),
            },
        ],
    }
}

/// Drop the final `.ext` segment of a file name. Names without an extension
/// (or starting with the only dot) pass through unchanged.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => &name[..idx],
        _ => name,
    }
}

/// Last `n` characters of an id, used for display titles.
fn id_tail(id: &str, n: usize) -> &str {
    match id.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &id[idx..],
        None => id,
    }
}
