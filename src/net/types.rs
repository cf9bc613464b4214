//! Wire DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads so serde stays lossless.
//! Board listings omit `shared_users`/`tasks`; those fields default to empty
//! so one `Board` type serves both the list and detail payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An account snapshot as returned by the server. Never edited locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// A task embedded in exactly one board's `tasks` sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Priority from 1 (lowest) to 5 (highest).
    pub priority: u8,
}

/// A board with its owner and, in detail payloads, its members and tasks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: i64,
    pub title: String,
    /// URL slug used to address the board in detail requests.
    pub url: String,
    pub owner: User,
    #[serde(default)]
    pub shared_users: Vec<User>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct BoardTitleRequest<'a> {
    pub title: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct TaskRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub priority: u8,
}

#[derive(Clone, Debug, Serialize)]
pub struct SharedUserRequest<'a> {
    pub username: &'a str,
}

// =============================================================================
// RESPONSE BODIES
// =============================================================================

/// Login/register response: a fresh token plus the account it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

/// `GET /api/board/list/` response: boards the user owns and boards shared
/// with them, as two disjoint sequences.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BoardListResponse {
    #[serde(default)]
    pub owned_boards: Vec<Board>,
    #[serde(default)]
    pub shared_boards: Vec<Board>,
}

/// Envelope the server wraps a single board in for create/update responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BoardResponse {
    pub board: Board,
}

/// Envelope for task create/update responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TaskResponse {
    pub task: Task,
}

/// Envelope for shared-user create responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SharedUserResponse {
    pub user: User,
}
