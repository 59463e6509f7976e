use chrono::Utc;
use tracing::info;

use reels_shared::models::Video;
use reels_shared::types::VideoStatus;

use crate::actions::{Action, VideoPatch};
use crate::app::App;

/// Upload a file into the workspace. The service derives the title from the
/// file name; the draft lands in the store on completion.
pub async fn upload(app: &App, file_name: &str) -> Video {
    app.store.dispatch(Action::SetLoading(true));

    let video = app.api.upload_video(file_name).await;
    info!(video = %video.id, title = %video.title, "video uploaded");
    app.store.dispatch(Action::AddVideo(video.clone()));

    app.store.dispatch(Action::SetLoading(false));
    video
}

/// Mark a video as published to the given platforms. No-op for an unknown
/// id, like every by-id update.
pub fn publish(app: &App, video_id: &str, platforms: Vec<String>) {
    app.store.dispatch(Action::UpdateVideo {
        id: video_id.to_string(),
        patch: VideoPatch {
            status: Some(VideoStatus::Published),
            platforms: Some(platforms),
            updated_at: Some(Utc::now()),
            ..Default::default()
        },
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_appends_a_draft() {
        let app = App::for_tests();

        let video = upload(&app, "clip.mov").await;
        assert_eq!(video.title, "clip");

        let snapshot = app.store.snapshot();
        assert_eq!(snapshot.videos.len(), 1);
        assert_eq!(snapshot.videos[0].status, VideoStatus::Draft);
        assert!(!snapshot.is_loading);
    }

    #[tokio::test]
    async fn publish_updates_status_and_platforms() {
        let app = App::for_tests();
        let video = upload(&app, "clip.mov").await;

        publish(&app, &video.id, vec!["tiktok".into(), "instagram".into()]);

        let published = &app.store.snapshot().videos[0];
        assert_eq!(published.status, VideoStatus::Published);
        assert_eq!(published.platforms, ["tiktok", "instagram"]);
        assert!(published.updated_at >= video.updated_at);
    }
}
