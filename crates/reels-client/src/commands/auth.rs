use tracing::info;

use reels_shared::models::User;

use crate::actions::Action;
use crate::api::ApiError;
use crate::app::App;

/// Sign in. On success the user lands in the store and any stale error is
/// cleared; on failure the error message is surfaced instead.
pub async fn login(app: &App, email: &str, password: &str) -> Result<User, ApiError> {
    app.store.dispatch(Action::SetLoading(true));

    let result = app.api.login(email, password).await;
    match &result {
        Ok(user) => {
            info!(user = %user.id, "login succeeded");
            app.store.dispatch(Action::SetUser(Some(user.clone())));
            app.store.dispatch(Action::SetError(None));
        }
        Err(err) => {
            app.store.dispatch(Action::SetError(Some(err.to_string())));
        }
    }

    app.store.dispatch(Action::SetLoading(false));
    result
}

/// Create an account and sign it in. Never fails in this version.
pub async fn signup(app: &App, full_name: &str, email: &str, password: &str) -> User {
    app.store.dispatch(Action::SetLoading(true));

    let user = app.api.signup(full_name, email, password).await;
    info!(user = %user.id, "account created");
    app.store.dispatch(Action::SetUser(Some(user.clone())));
    app.store.dispatch(Action::SetError(None));

    app.store.dispatch(Action::SetLoading(false));
    user
}

/// Sign out the current user. Session data stays in place.
pub fn logout(app: &App) {
    app.store.dispatch(Action::SetUser(None));
}
