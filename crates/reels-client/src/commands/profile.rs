use tracing::info;

use reels_shared::models::User;

use crate::actions::Action;
use crate::app::App;

/// Save edited profile fields. The user record is replaced wholesale, stats
/// and plan carried over. Returns `None` when nobody is signed in.
pub fn update_profile(app: &App, full_name: &str, email: &str) -> Option<User> {
    let user = app.store.snapshot().user?;

    let updated = User {
        full_name: full_name.to_string(),
        email: email.to_string(),
        ..user
    };

    info!(user = %updated.id, "profile updated");
    app.store.dispatch(Action::SetUser(Some(updated.clone())));
    Some(updated)
}
