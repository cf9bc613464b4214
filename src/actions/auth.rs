//! Session actions: load the current user, log in, register, log out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use tracing::info;

use super::dispatch_api_failure;
use crate::net::api::ApiClient;
use crate::net::types::{LoginRequest, RegisterRequest, SessionResponse, User};
use crate::state::{Event, RequestKey, Store};

/// Validate the stored token by fetching the account it belongs to.
///
/// Failure forces a logout: the error is surfaced and the session cleared.
pub async fn load_user(api: &ApiClient, store: &Store) {
    store.dispatch(Event::UserLoading);
    let epoch = store.begin_request(RequestKey::CurrentUser);
    let token = store.token();

    match api.get::<User>("/api/auth/user", token.as_deref()).await {
        Ok(user) => {
            store.dispatch_if_current(RequestKey::CurrentUser, epoch, Event::UserLoaded(user));
        }
        Err(err) => {
            dispatch_api_failure(store, &err);
            store.dispatch(Event::AuthError);
        }
    }
}

/// Exchange credentials for a session token.
pub async fn login(api: &ApiClient, store: &Store, username: &str, password: &str) {
    let body = LoginRequest { username, password };

    match api.post::<_, SessionResponse>("/api/auth/login/", &body, None).await {
        Ok(session) => {
            info!(user_id = session.user.id, "logged in");
            store.dispatch(Event::LoginSuccess { token: session.token, user: session.user });
        }
        Err(err) => {
            dispatch_api_failure(store, &err);
            store.dispatch(Event::LoginFail);
        }
    }
}

/// Create an account; a successful registration also opens a session.
pub async fn register(api: &ApiClient, store: &Store, request: &RegisterRequest<'_>) {
    match api.post::<_, SessionResponse>("/api/auth/register/", request, None).await {
        Ok(session) => {
            info!(user_id = session.user.id, "registered");
            store.dispatch(Event::RegisterSuccess { token: session.token, user: session.user });
        }
        Err(err) => {
            dispatch_api_failure(store, &err);
            store.dispatch(Event::RegisterFail);
        }
    }
}

/// Invalidate the session token server-side and clear the session.
///
/// A failed logout surfaces the error but keeps the session: only a
/// confirmed logout clears local state.
pub async fn logout(api: &ApiClient, store: &Store) {
    let token = store.token();

    match api.post_empty("/api/auth/logout/", token.as_deref()).await {
        Ok(()) => store.dispatch(Event::LogoutSuccess),
        Err(err) => dispatch_api_failure(store, &err),
    }
}
