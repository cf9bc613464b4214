//! Tagged events describing completed operations.
//!
//! DESIGN
//! ======
//! One variant per action outcome. Actions construct events from server
//! payloads; reducers consume them. Reducers must treat the domain as total:
//! variants they do not recognize leave their slice unchanged.

use crate::net::types::{Board, Task, User};
use crate::state::messages::FlashMessage;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    // Auth
    UserLoading,
    UserLoaded(User),
    AuthError,
    LoginSuccess { token: String, user: User },
    LoginFail,
    RegisterSuccess { token: String, user: User },
    RegisterFail,
    LogoutSuccess,

    // Board list
    BoardsLoaded { owned: Vec<Board>, shared: Vec<Board> },
    BoardCreated(Board),
    BoardDeleted { id: i64 },

    // Board detail
    BoardLoaded { board: Board, user_id: i64 },
    BoardTitleUpdated { id: i64, title: String },
    TaskCreated(Task),
    TaskUpdated(Task),
    TaskDeleted { id: i64 },
    SharedUserAdded(User),
    SharedUserRemoved { id: i64 },

    // Cross-cutting
    ApiFailure { message: serde_json::Value, status: u16 },
    Flash(FlashMessage),
}
