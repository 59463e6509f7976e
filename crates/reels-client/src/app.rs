//! Application wiring.
//!
//! [`App`] owns the session store, the mock service endpoint and the
//! progress engine, and optionally keeps a persistence mirror running.
//! Views (or tests) drive it through the [`crate::commands`] modules.

use std::path::PathBuf;

use tokio::task::JoinHandle;

use reels_store::Store;

use crate::api::{MockApi, MockApiConfig};
use crate::persist;
use crate::progress::ProgressEngine;
use crate::store::AppStore;

/// Construction parameters for [`App`].
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Explicit database location. `None` uses the platform data directory.
    pub db_path: Option<PathBuf>,
    pub api: MockApiConfig,
    /// Seed for the progress engine's step draws. `None` seeds from entropy.
    pub progress_seed: Option<u64>,
}

/// The assembled session core.
pub struct App {
    pub store: AppStore,
    pub api: MockApi,
    pub progress: ProgressEngine,
    mirror: Option<JoinHandle<()>>,
}

impl App {
    /// An app with default config and no persistence attached.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Assemble the core without opening the persistent store. State lives
    /// and dies with the process.
    pub fn with_config(config: AppConfig) -> Self {
        let store = AppStore::new();
        let progress = match config.progress_seed {
            Some(seed) => ProgressEngine::seeded(store.clone(), seed),
            None => ProgressEngine::new(store.clone()),
        };

        Self {
            store,
            api: MockApi::with_config(config.api),
            progress,
            mirror: None,
        }
    }

    /// Assemble the core with persistence: open the store, restore the
    /// saved session once, then mirror every subsequent change.
    ///
    /// Must be called inside a tokio runtime.
    pub fn bootstrap(mut config: AppConfig) -> reels_store::Result<Self> {
        let db = match config.db_path.take() {
            Some(path) => Store::open_at(&path)?,
            None => Store::new()?,
        };

        let mut app = Self::with_config(config);

        // Subscribe before the merge so the restored snapshot is mirrored
        // back like any other change.
        let rx = app.store.subscribe();
        persist::load_into(&db, &app.store);
        app.mirror = Some(persist::spawn_mirror(db, rx));

        Ok(app)
    }

    /// Stop the core and let the mirror drain its queue before returning.
    pub async fn shutdown(self) {
        let App {
            store,
            api,
            progress,
            mirror,
        } = self;

        // Dropping the engine aborts outstanding simulations; dropping the
        // last store handle closes the broadcast channel the mirror reads.
        drop(progress);
        drop(api);
        drop(store);

        if let Some(mirror) = mirror {
            let _ = mirror.await;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl App {
    /// Latency-free, seeded core with no persistence attached.
    pub(crate) fn for_tests() -> Self {
        Self::with_config(AppConfig {
            db_path: None,
            api: MockApiConfig {
                latency: false,
                seed: Some(42),
            },
            progress_seed: Some(42),
        })
    }
}

#[cfg(test)]
mod tests {
    use reels_shared::constants::{DEMO_EMAIL, DEMO_PASSWORD};

    use crate::commands::{auth, videos};

    use super::*;

    fn test_config(dir: &tempfile::TempDir) -> AppConfig {
        AppConfig {
            db_path: Some(dir.path().join("reels.db")),
            api: MockApiConfig {
                latency: false,
                seed: Some(42),
            },
            progress_seed: Some(42),
        }
    }

    #[tokio::test]
    async fn bootstrap_restores_a_previous_session() {
        let dir = tempfile::tempdir().unwrap();

        // First run: sign in, upload, shut down.
        let app = App::bootstrap(test_config(&dir)).unwrap();
        auth::login(&app, DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        videos::upload(&app, "clip.mov").await;
        app.shutdown().await;

        // Second run: the session comes back.
        let app = App::bootstrap(test_config(&dir)).unwrap();
        let snapshot = app.store.snapshot();
        assert_eq!(snapshot.user.as_ref().unwrap().email, DEMO_EMAIL);
        assert_eq!(snapshot.videos.len(), 1);
        assert_eq!(snapshot.videos[0].title, "clip");
        app.shutdown().await;
    }

    #[tokio::test]
    async fn bootstrap_on_an_empty_store_is_a_cold_start() {
        let dir = tempfile::tempdir().unwrap();

        let app = App::bootstrap(test_config(&dir)).unwrap();
        let snapshot = app.store.snapshot();
        assert!(snapshot.user.is_none());
        assert!(snapshot.videos.is_empty());
        assert_eq!(snapshot.templates.len(), 3);
        app.shutdown().await;
    }
}
