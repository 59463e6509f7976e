use tracing::info;

use reels_shared::models::Analytics;
use reels_store::PersistedState;

use crate::actions::Action;
use crate::app::App;

/// Fetch a fresh analytics snapshot and overwrite the stored one. The rest
/// of the session state is untouched.
pub async fn refresh(app: &App) -> Analytics {
    let analytics = app.api.get_analytics().await;
    info!(total_views = analytics.total_views, "analytics refreshed");

    app.store.dispatch(Action::LoadData(PersistedState {
        analytics: Some(analytics.clone()),
        ..Default::default()
    }));

    analytics
}
