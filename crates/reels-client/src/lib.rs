//! # reels-client
//!
//! The session core of the TheReelsApp dashboard: a publishing state store
//! driven by a closed action set, a mock remote-service layer, a cancellable
//! progress-simulation engine and a persistence mirror. A view layer sits on
//! top of [`App`] and the `commands` modules; nothing here renders anything.

pub mod actions;
pub mod api;
pub mod app;
pub mod commands;
pub mod persist;
pub mod progress;
pub mod reducer;
pub mod state;
pub mod store;

pub use actions::{Action, ProcessPatch, VideoPatch};
pub use api::{ApiError, ConnectResult, MockApi, MockApiConfig};
pub use app::{App, AppConfig};
pub use progress::{ProgressEngine, ProgressProfile};
pub use state::AppState;
pub use store::AppStore;

use tracing_subscriber::{fmt, EnvFilter};

use reels_shared::constants::APP_NAME;

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; the fallback filter keeps the session core
/// chatty and everything else quiet.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("reels_client=debug,reels_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::info!("Starting {APP_NAME} session core");
}
