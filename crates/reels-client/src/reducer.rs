//! The pure transition function over (state, action).
//!
//! Transitions are synchronous and total: no action can fail, absent ids are
//! silently ignored, and errors are carried through the state's error field
//! by callers rather than surfaced here.

use crate::actions::Action;
use crate::state::AppState;

/// Apply one action to a state snapshot, producing the next snapshot.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::SetUser(user) => next.user = user,

        Action::AddVideo(video) => next.videos.push(video),

        Action::UpdateVideo { id, patch } => {
            if let Some(video) = next.videos.iter_mut().find(|v| v.id == id) {
                patch.apply(video);
            }
        }

        Action::DeleteVideo(id) => next.videos.retain(|v| v.id != id),

        Action::AddAiProcess(process) => next.ai_processes.push(process),

        Action::UpdateAiProcess { id, patch } => {
            if let Some(process) = next.ai_processes.iter_mut().find(|p| p.id == id) {
                patch.apply(process);
            }
        }

        Action::TogglePlatform(id) => {
            if let Some(platform) = next.platforms.iter_mut().find(|p| p.id == id) {
                platform.connected = !platform.connected;
            }
        }

        Action::SetLoading(is_loading) => next.is_loading = is_loading,

        Action::SetError(error) => next.error = error,

        Action::LoadData(data) => {
            if let Some(user) = data.user {
                next.user = Some(user);
            }
            if let Some(videos) = data.videos {
                next.videos = videos;
            }
            if let Some(ai_processes) = data.ai_processes {
                next.ai_processes = ai_processes;
            }
            if let Some(platforms) = data.platforms {
                next.platforms = platforms;
            }
            if let Some(analytics) = data.analytics {
                next.analytics = analytics;
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use reels_shared::models::{AiProcess, Analytics, User, UserStats, Video};
    use reels_shared::types::{Plan, ProcessStatus, VideoStatus};
    use reels_store::PersistedState;

    use crate::actions::{ProcessPatch, VideoPatch};

    use super::*;

    fn video(id: &str) -> Video {
        Video {
            id: id.into(),
            title: "clip".into(),
            thumbnail: "gradient-1".into(),
            duration: 60,
            views: 0,
            likes: 0,
            shares: 0,
            platforms: vec![],
            status: VideoStatus::Draft,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn process(id: &str) -> AiProcess {
        AiProcess {
            id: id.into(),
            title: "Video v-01".into(),
            tool: "Auto Captions".into(),
            status: ProcessStatus::Processing,
            progress: 0.0,
            created_at: Utc::now(),
        }
    }

    fn user() -> User {
        User {
            id: "1".into(),
            full_name: "Jane Doe".into(),
            email: "jane@x.com".into(),
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

    #[test]
    fn set_user_replaces_only_the_user_field() {
        let state = AppState::initial();
        let next = reduce(&state, Action::SetUser(Some(user())));

        assert!(next.user.is_some());
        assert_eq!(
            AppState {
                user: state.user.clone(),
                ..next
            },
            state
        );
    }

    #[test]
    fn add_then_update_video() {
        let state = AppState::initial();
        let state = reduce(&state, Action::AddVideo(video("v1")));
        let state = reduce(
            &state,
            Action::UpdateVideo {
                id: "v1".into(),
                patch: VideoPatch {
                    status: Some(VideoStatus::Published),
                    ..Default::default()
                },
            },
        );

        assert_eq!(state.videos.len(), 1);
        assert_eq!(state.videos[0].id, "v1");
        assert_eq!(state.videos[0].status, VideoStatus::Published);
    }

    #[test]
    fn update_with_absent_id_is_a_structural_noop() {
        let state = reduce(&AppState::initial(), Action::AddVideo(video("v1")));
        let next = reduce(
            &state,
            Action::UpdateVideo {
                id: "missing".into(),
                patch: VideoPatch {
                    status: Some(VideoStatus::Published),
                    ..Default::default()
                },
            },
        );

        assert_eq!(next, state);
    }

    #[test]
    fn delete_video_removes_matching_id_only() {
        let state = reduce(&AppState::initial(), Action::AddVideo(video("v1")));
        let state = reduce(&state, Action::AddVideo(video("v2")));

        let next = reduce(&state, Action::DeleteVideo("v1".into()));
        assert_eq!(next.videos.len(), 1);
        assert_eq!(next.videos[0].id, "v2");

        let unchanged = reduce(&next, Action::DeleteVideo("missing".into()));
        assert_eq!(unchanged, next);
    }

    #[test]
    fn update_absent_process_is_a_structural_noop() {
        let state = reduce(&AppState::initial(), Action::AddAiProcess(process("p1")));
        let next = reduce(
            &state,
            Action::UpdateAiProcess {
                id: "missing".into(),
                patch: ProcessPatch {
                    progress: Some(50.0),
                    ..Default::default()
                },
            },
        );

        assert_eq!(next, state);
    }

    #[test]
    fn toggle_platform_twice_restores_original_flag() {
        let state = AppState::initial();
        let original = state
            .platforms
            .iter()
            .find(|p| p.id == "tiktok")
            .unwrap()
            .connected;

        let once = reduce(&state, Action::TogglePlatform("tiktok".into()));
        assert_ne!(
            once.platforms.iter().find(|p| p.id == "tiktok").unwrap().connected,
            original
        );

        let twice = reduce(&once, Action::TogglePlatform("tiktok".into()));
        assert_eq!(twice, state);
    }

    #[test]
    fn toggle_unknown_platform_is_a_noop() {
        let state = AppState::initial();
        assert_eq!(reduce(&state, Action::TogglePlatform("myspace".into())), state);
    }

    #[test]
    fn loading_and_error_flags_replace_in_place() {
        let state = AppState::initial();

        let loading = reduce(&state, Action::SetLoading(true));
        assert!(loading.is_loading);

        let errored = reduce(&loading, Action::SetError(Some("Invalid credentials".into())));
        assert_eq!(errored.error.as_deref(), Some("Invalid credentials"));

        let cleared = reduce(&errored, Action::SetError(None));
        assert!(cleared.error.is_none());
    }

    #[test]
    fn load_data_merges_present_fields_only() {
        let state = reduce(&AppState::initial(), Action::AddVideo(video("v1")));

        let next = reduce(
            &state,
            Action::LoadData(PersistedState {
                user: Some(user()),
                analytics: Some(Analytics {
                    total_views: 9000,
                    ..Analytics::default()
                }),
                ..Default::default()
            }),
        );

        assert!(next.user.is_some());
        assert_eq!(next.analytics.total_views, 9000);
        // Absent fields keep their current values.
        assert_eq!(next.videos, state.videos);
        assert_eq!(next.platforms, state.platforms);
    }

    #[test]
    fn load_data_never_touches_templates_or_flags() {
        let state = reduce(&AppState::initial(), Action::SetLoading(true));
        let next = reduce(
            &state,
            Action::LoadData(PersistedState {
                videos: Some(vec![video("v9")]),
                ..Default::default()
            }),
        );

        assert!(next.is_loading);
        assert_eq!(next.templates, state.templates);
    }
}
