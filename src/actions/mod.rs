//! Async actions: one HTTP call each, dispatching tagged events.
//!
//! DESIGN
//! ======
//! Every action issues exactly one request through the [`crate::net::api`]
//! adapter. Success dispatches the operation's event (plus a flash message
//! for user-visible mutations); failure dispatches an [`Event::ApiFailure`]
//! carrying the server payload and status, followed by the operation's
//! failure event where one exists. No action coordinates multiple in-flight
//! requests.

pub mod auth;
pub mod boards;

use tracing::warn;

use crate::net::api::ApiError;
use crate::state::{Event, Store};

/// Surface an adapter failure to the errors slice. Transport and decode
/// failures report status 0.
fn dispatch_api_failure(store: &Store, err: &ApiError) {
    warn!(status = err.status(), error = %err, "api request failed");
    store.dispatch(Event::ApiFailure { message: err.body(), status: err.status() });
}
