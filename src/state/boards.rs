//! Boards slice: the dashboard listing or a single loaded board.
//!
//! DESIGN
//! ======
//! The view is a tagged union rather than one shape-shifting record:
//! `List` holds the dashboard's owned/shared sequences, `Detail` holds
//! exactly one board plus whether the current user owns it. Events that
//! only make sense in one view fail with an [`InvariantError`] in the
//! other instead of silently corrupting state; the store reports those as
//! internal errors and keeps the slice unchanged.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use crate::net::types::Board;
use crate::state::Event;

/// Which boards view is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardsView {
    /// Dashboard listing: boards the user owns and boards shared with them.
    List { owned: Vec<Board>, shared: Vec<Board> },
    /// A single board's detail view. `owned` records whether the current
    /// user is the board's owner.
    Detail { board: Board, owned: bool },
}

impl Default for BoardsView {
    fn default() -> Self {
        Self::List { owned: Vec::new(), shared: Vec::new() }
    }
}

impl BoardsView {
    /// The loaded board when in the detail view.
    pub fn detail_board(&self) -> Option<&Board> {
        match self {
            Self::Detail { board, .. } => Some(board),
            Self::List { .. } => None,
        }
    }
}

/// A board event arrived while the slice was in a view it cannot apply to.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("{0} requires the board list view")]
    NotListView(&'static str),
    #[error("{0} requires a loaded board detail view")]
    NotDetailView(&'static str),
    #[error("cannot rename a board the current user does not own")]
    NotOwner,
    #[error("no board with id {0} in the current view")]
    UnknownBoard(i64),
    #[error("no task with id {0} on the loaded board")]
    UnknownTask(i64),
    #[error("no shared user with id {0} on the loaded board")]
    UnknownSharedUser(i64),
}

/// Fold an event into the boards slice.
///
/// # Errors
///
/// Returns an [`InvariantError`] when the event's view precondition does not
/// hold; the caller keeps the previous state in that case.
pub fn reduce(state: &BoardsView, event: &Event) -> Result<BoardsView, InvariantError> {
    match event {
        Event::BoardsLoaded { owned, shared } => {
            Ok(BoardsView::List { owned: owned.clone(), shared: shared.clone() })
        }

        Event::BoardCreated(board) => match state {
            BoardsView::List { owned, shared } => {
                let mut owned = owned.clone();
                owned.push(board.clone());
                Ok(BoardsView::List { owned, shared: shared.clone() })
            }
            BoardsView::Detail { .. } => Err(InvariantError::NotListView("board create")),
        },

        Event::BoardDeleted { id } => match state {
            BoardsView::List { owned, shared } => {
                if !owned.iter().any(|b| b.id == *id) {
                    return Err(InvariantError::UnknownBoard(*id));
                }
                let owned = owned.iter().filter(|b| b.id != *id).cloned().collect();
                Ok(BoardsView::List { owned, shared: shared.clone() })
            }
            BoardsView::Detail { .. } => Err(InvariantError::NotListView("board delete")),
        },

        Event::BoardLoaded { board, user_id } => {
            Ok(BoardsView::Detail { owned: board.owner.id == *user_id, board: board.clone() })
        }

        Event::BoardTitleUpdated { id, title } => match state {
            BoardsView::Detail { board, owned: true } if board.id == *id => {
                let mut board = board.clone();
                board.title = title.clone();
                Ok(BoardsView::Detail { board, owned: true })
            }
            BoardsView::Detail { owned: false, .. } => Err(InvariantError::NotOwner),
            BoardsView::Detail { .. } => Err(InvariantError::UnknownBoard(*id)),
            BoardsView::List { .. } => Err(InvariantError::NotDetailView("board rename")),
        },

        Event::TaskCreated(task) => with_detail_board(state, "task create", |board| {
            board.tasks.push(task.clone());
            Ok(())
        }),

        Event::TaskUpdated(task) => with_detail_board(state, "task update", |board| {
            let slot = board
                .tasks
                .iter_mut()
                .find(|t| t.id == task.id)
                .ok_or(InvariantError::UnknownTask(task.id))?;
            *slot = task.clone();
            Ok(())
        }),

        Event::TaskDeleted { id } => with_detail_board(state, "task delete", |board| {
            if !board.tasks.iter().any(|t| t.id == *id) {
                return Err(InvariantError::UnknownTask(*id));
            }
            board.tasks.retain(|t| t.id != *id);
            Ok(())
        }),

        Event::SharedUserAdded(user) => with_detail_board(state, "share board", |board| {
            board.shared_users.push(user.clone());
            Ok(())
        }),

        Event::SharedUserRemoved { id } => with_detail_board(state, "unshare board", |board| {
            if !board.shared_users.iter().any(|u| u.id == *id) {
                return Err(InvariantError::UnknownSharedUser(*id));
            }
            board.shared_users.retain(|u| u.id != *id);
            Ok(())
        }),

        _ => Ok(state.clone()),
    }
}

/// Apply an edit to the detail-view board, preserving ownership.
fn with_detail_board(
    state: &BoardsView,
    operation: &'static str,
    edit: impl FnOnce(&mut Board) -> Result<(), InvariantError>,
) -> Result<BoardsView, InvariantError> {
    match state {
        BoardsView::Detail { board, owned } => {
            let mut board = board.clone();
            edit(&mut board)?;
            Ok(BoardsView::Detail { board, owned: *owned })
        }
        BoardsView::List { .. } => Err(InvariantError::NotDetailView(operation)),
    }
}
