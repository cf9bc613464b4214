//! Application state: per-slice reducers composed into one tree.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `boards`, `errors`, `messages`) so
//! each reducer stays a small pure function over its own slice. Reduction
//! never mutates in place: every slice reducer receives the current
//! snapshot and returns a new one.
//!
//! ERROR HANDLING
//! ==============
//! The boards reducer is the only fallible one; a violated view
//! precondition leaves the slice untouched and lands in the errors slice
//! as an internal entry, so the UI's alert channel surfaces it instead of
//! the client corrupting state or panicking.


pub mod auth;
pub mod boards;
pub mod errors;
pub mod event;
pub mod messages;
pub mod store;

pub use event::Event;
pub use store::{RequestKey, Store};

use tracing::warn;

/// The full application state tree, the single source of truth read by
/// presentation components.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub auth: auth::AuthState,
    pub boards: boards::BoardsView,
    pub errors: errors::ErrorState,
    pub messages: messages::MessageState,
}

impl AppState {
    /// Fold one event through every slice reducer, returning the next tree.
    pub fn reduce(&self, event: &Event) -> Self {
        let boards = match boards::reduce(&self.boards, event) {
            Ok(next) => next,
            Err(violation) => {
                warn!(error = %violation, "board event violated a view precondition");
                return Self {
                    auth: auth::reduce(&self.auth, event),
                    boards: self.boards.clone(),
                    errors: errors::ErrorState {
                        current: Some(errors::ErrorEntry::Internal { message: violation.to_string() }),
                    },
                    messages: messages::reduce(&self.messages, event),
                };
            }
        };

        Self {
            auth: auth::reduce(&self.auth, event),
            boards,
            errors: errors::reduce(&self.errors, event),
            messages: messages::reduce(&self.messages, event),
        }
    }
}
