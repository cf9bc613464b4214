//! Errors slice: the most recent failure, shown via the alert channel.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use crate::state::Event;

/// A reportable failure. Single-slot: each new entry replaces the last.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorEntry {
    /// The server (or transport) rejected a request. `status` is the HTTP
    /// code, or 0 when the request never produced a response.
    Api { message: serde_json::Value, status: u16 },
    /// A client-side precondition was violated (e.g. a board event arrived
    /// in the wrong view).
    Internal { message: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorState {
    pub current: Option<ErrorEntry>,
}

/// Fold an event into the errors slice.
pub fn reduce(state: &ErrorState, event: &Event) -> ErrorState {
    match event {
        Event::ApiFailure { message, status } => ErrorState {
            current: Some(ErrorEntry::Api { message: message.clone(), status: *status }),
        },
        _ => state.clone(),
    }
}
