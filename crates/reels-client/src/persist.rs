//! Bridge between the session store and the persistence layer.
//!
//! The mirror task subscribes to the store and rewrites the persisted blob
//! on every published snapshot, whichever field changed. Loading happens
//! once at startup; later external changes to the blob are not observed.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use reels_store::{PersistedState, Store};

use crate::actions::Action;
use crate::state::AppState;
use crate::store::AppStore;

/// Project a session snapshot onto its durable subset.
///
/// Loading/error flags and the static template catalogue are deliberately
/// excluded.
pub fn persisted_subset(state: &AppState) -> PersistedState {
    PersistedState {
        user: state.user.clone(),
        videos: Some(state.videos.clone()),
        ai_processes: Some(state.ai_processes.clone()),
        platforms: Some(state.platforms.clone()),
        analytics: Some(state.analytics.clone()),
    }
}

/// Perform the one-time startup merge of the saved blob into the store.
///
/// Returns whether anything was restored. A missing or corrupt blob is a
/// normal cold start, not an error.
pub fn load_into(db: &Store, store: &AppStore) -> bool {
    match db.load_state() {
        Some(persisted) => {
            store.dispatch(Action::LoadData(persisted));
            debug!("restored persisted session state");
            true
        }
        None => false,
    }
}

/// Spawn the write-on-every-change mirror.
///
/// The task ends when every store handle has been dropped. Write failures
/// are logged and swallowed; stale persistence is the worst case, never a
/// crash.
pub fn spawn_mirror(db: Store, mut rx: broadcast::Receiver<AppState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(snapshot) => {
                    if let Err(err) = db.save_state(&persisted_subset(&snapshot)) {
                        warn!(error = %err, "failed to mirror session state");
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(skipped, "mirror lagged behind; resuming from latest snapshot");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        debug!("persistence mirror stopped");
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use reels_shared::models::Video;
    use reels_shared::types::VideoStatus;

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

    #[test]
    fn subset_carries_exactly_the_durable_fields() {
        let store = AppStore::new();
        store.dispatch(Action::SetLoading(true));
        store.dispatch(Action::SetError(Some("boom".into())));
        store.dispatch(Action::AddVideo(video("v1")));

        let subset = persisted_subset(&store.snapshot());

        assert!(subset.user.is_none());
        assert_eq!(subset.videos.as_ref().unwrap().len(), 1);
        assert_eq!(subset.platforms.as_ref().unwrap().len(), 3);
        assert!(subset.analytics.is_some());
    }

    #[tokio::test]
    async fn mirror_writes_every_dispatched_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reels.db");

        let store = AppStore::new();
        let db = Store::open_at(&path).unwrap();
        let mirror = spawn_mirror(db, store.subscribe());

        store.dispatch(Action::AddVideo(video("v1")));
        store.dispatch(Action::TogglePlatform("tiktok".into()));

        // Closing the channel lets the mirror drain and exit.
        drop(store);
        mirror.await.unwrap();

        let reopened = Store::open_at(&path).unwrap();
        let persisted = reopened.load_state().expect("blob should exist");
        assert_eq!(persisted.videos.as_ref().unwrap()[0].id, "v1");
        assert!(
            persisted
                .platforms
                .as_ref()
                .unwrap()
                .iter()
                .find(|p| p.id == "tiktok")
                .unwrap()
                .connected
        );
    }

    #[tokio::test]
    async fn load_into_merges_the_saved_blob_once() {
        let db = Store::open_in_memory().unwrap();
        let store = AppStore::new();

        assert!(!load_into(&db, &store));

        db.save_state(&PersistedState {
            videos: Some(vec![video("v7")]),
            ..Default::default()
        })
        .unwrap();

        assert!(load_into(&db, &store));
        let snapshot = store.snapshot();
        assert_eq!(snapshot.videos.len(), 1);
        assert_eq!(snapshot.videos[0].id, "v7");
        // Fields absent from the blob keep their seeds.
        assert_eq!(snapshot.platforms.len(), 3);
    }

    #[tokio::test]
    async fn round_trip_preserves_the_durable_subset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reels.db");

        let store = AppStore::new();
        let db = Store::open_at(&path).unwrap();
        let mirror = spawn_mirror(db, store.subscribe());

        store.dispatch(Action::AddVideo(video("v1")));
        let expected = persisted_subset(&store.snapshot());

        drop(store);
        mirror.await.unwrap();

        let restored = AppStore::new();
        let reopened = Store::open_at(&path).unwrap();
        assert!(load_into(&reopened, &restored));

        assert_eq!(persisted_subset(&restored.snapshot()), expected);
    }
}
