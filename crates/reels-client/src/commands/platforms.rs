use tracing::info;

use crate::actions::Action;
use crate::api::ConnectResult;
use crate::app::App;

/// Connect (or disconnect) a publishing platform. The connected flag is
/// only toggled when the service reports success.
pub async fn connect(app: &App, platform_id: &str) -> ConnectResult {
    let result = app.api.connect_platform(platform_id).await;

    if result.success {
        app.store
            .dispatch(Action::TogglePlatform(platform_id.to_string()));
        info!(platform = platform_id, "platform connection toggled");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(app: &App, id: &str) -> bool {
        app.store
            .snapshot()
            .platforms
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.connected)
            .unwrap_or(false)
    }

    #[tokio::test]
    async fn connect_toggles_the_flag() {
        let app = App::for_tests();
        assert!(!connected(&app, "tiktok"));

        let result = connect(&app, "tiktok").await;
        assert!(result.success);
        assert_eq!(result.followers.as_deref(), Some("45.2K"));
        assert!(connected(&app, "tiktok"));

        // A second connect flips it back: same action, same toggle.
        connect(&app, "tiktok").await;
        assert!(!connected(&app, "tiktok"));
    }

    #[tokio::test]
    async fn connecting_an_unknown_platform_leaves_state_unchanged() {
        let app = App::for_tests();
        let before = app.store.snapshot();

        let result = connect(&app, "myspace").await;
        assert!(result.success);

        // The toggle dispatch is a no-op for ids outside the fixed set.
        assert_eq!(app.store.snapshot(), before);
    }
}
