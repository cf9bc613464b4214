//! Session slice: token, current user, and loading status.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::state::Event;

/// Authentication state for the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// Fold an event into the auth slice.
///
/// Any auth failure (or logout) clears the whole session: token, user, and
/// the authenticated flag all reset.
pub fn reduce(state: &AuthState, event: &Event) -> AuthState {
    match event {
        Event::UserLoading => AuthState { is_loading: true, ..state.clone() },
        // Token is already held; the server only returns the account.
        Event::UserLoaded(user) => AuthState {
            token: state.token.clone(),
            user: Some(user.clone()),
            is_authenticated: true,
            is_loading: false,
        },
        Event::LoginSuccess { token, user } | Event::RegisterSuccess { token, user } => AuthState {
            token: Some(token.clone()),
            user: Some(user.clone()),
            is_authenticated: true,
            is_loading: false,
        },
        Event::AuthError | Event::LoginFail | Event::RegisterFail | Event::LogoutSuccess => {
            AuthState::default()
        }
        _ => state.clone(),
    }
}
