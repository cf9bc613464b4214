//! Board actions: listing, creation, detail loading, and the detail-view
//! mutations (rename, delete, tasks, sharing).

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use tracing::info;

use super::dispatch_api_failure;
use crate::net::api::ApiClient;
use crate::net::types::{
    Board, BoardListResponse, BoardResponse, BoardTitleRequest, SharedUserRequest,
    SharedUserResponse, TaskRequest, TaskResponse,
};
use crate::state::messages::FlashMessage;
use crate::state::{Event, RequestKey, Store};

/// Load the dashboard listing of owned and shared boards.
pub async fn get_boards(api: &ApiClient, store: &Store) {
    let epoch = store.begin_request(RequestKey::BoardList);
    let token = store.token();

    match api.get::<BoardListResponse>("/api/board/list/", token.as_deref()).await {
        Ok(listing) => {
            store.dispatch_if_current(
                RequestKey::BoardList,
                epoch,
                Event::BoardsLoaded { owned: listing.owned_boards, shared: listing.shared_boards },
            );
        }
        Err(err) => dispatch_api_failure(store, &err),
    }
}

/// Create a board owned by the current user.
pub async fn create_board(api: &ApiClient, store: &Store, title: &str) {
    let body = BoardTitleRequest { title };
    let token = store.token();

    match api.post::<_, BoardResponse>("/api/board/create/", &body, token.as_deref()).await {
        Ok(created) => {
            info!(board_id = created.board.id, "board created");
            store.dispatch(Event::Flash(FlashMessage::new("create_board", "Board Created")));
            store.dispatch(Event::BoardCreated(created.board));
        }
        Err(err) => dispatch_api_failure(store, &err),
    }
}

/// Load one board's detail view. `user_id` decides owned-vs-shared
/// placement by comparison against the payload's owner.
pub async fn get_board(api: &ApiClient, store: &Store, url: &str, user_id: i64) {
    let epoch = store.begin_request(RequestKey::BoardDetail);
    let token = store.token();

    match api.get::<Board>(&format!("/api/board/{url}"), token.as_deref()).await {
        Ok(board) => {
            let applied = store.dispatch_if_current(
                RequestKey::BoardDetail,
                epoch,
                Event::BoardLoaded { board, user_id },
            );
            if applied {
                store.dispatch(Event::Flash(FlashMessage::new("get_board", "Board Loaded")));
            }
        }
        Err(err) => dispatch_api_failure(store, &err),
    }
}

/// Rename the board at `url`. The event carries the server's echo of the
/// board so the reducer applies what was actually stored.
pub async fn update_board(api: &ApiClient, store: &Store, url: &str, title: &str) {
    let body = BoardTitleRequest { title };
    let token = store.token();

    match api.put::<_, BoardResponse>(&format!("/api/board/{url}"), &body, token.as_deref()).await {
        Ok(updated) => {
            info!(board_id = updated.board.id, "board renamed");
            store.dispatch(Event::BoardTitleUpdated {
                id: updated.board.id,
                title: updated.board.title,
            });
        }
        Err(err) => dispatch_api_failure(store, &err),
    }
}

/// Delete the board at `url` from the dashboard listing.
pub async fn delete_board(api: &ApiClient, store: &Store, url: &str, board_id: i64) {
    let token = store.token();

    match api.delete(&format!("/api/board/{url}"), token.as_deref()).await {
        Ok(()) => {
            info!(board_id, "board deleted");
            store.dispatch(Event::Flash(FlashMessage::new("delete_board", "Board Deleted")));
            store.dispatch(Event::BoardDeleted { id: board_id });
        }
        Err(err) => dispatch_api_failure(store, &err),
    }
}

/// Add a task to the loaded board.
pub async fn create_task(api: &ApiClient, store: &Store, url: &str, task: &TaskRequest<'_>) {
    let token = store.token();
    let path = format!("/api/board/{url}/tasks/");

    match api.post::<_, TaskResponse>(&path, task, token.as_deref()).await {
        Ok(created) => {
            info!(task_id = created.task.id, "task created");
            store.dispatch(Event::Flash(FlashMessage::new("create_task", "Task Created")));
            store.dispatch(Event::TaskCreated(created.task));
        }
        Err(err) => dispatch_api_failure(store, &err),
    }
}

/// Update a task on the loaded board.
pub async fn update_task(
    api: &ApiClient,
    store: &Store,
    url: &str,
    task_id: i64,
    task: &TaskRequest<'_>,
) {
    let token = store.token();
    let path = format!("/api/board/{url}/tasks/{task_id}");

    match api.put::<_, TaskResponse>(&path, task, token.as_deref()).await {
        Ok(updated) => {
            info!(task_id = updated.task.id, "task updated");
            store.dispatch(Event::TaskUpdated(updated.task));
        }
        Err(err) => dispatch_api_failure(store, &err),
    }
}

/// Remove a task from the loaded board.
pub async fn delete_task(api: &ApiClient, store: &Store, url: &str, task_id: i64) {
    let token = store.token();

    match api.delete(&format!("/api/board/{url}/tasks/{task_id}"), token.as_deref()).await {
        Ok(()) => {
            info!(task_id, "task deleted");
            store.dispatch(Event::TaskDeleted { id: task_id });
        }
        Err(err) => dispatch_api_failure(store, &err),
    }
}

/// Share the loaded board with another user by username.
pub async fn add_shared_user(api: &ApiClient, store: &Store, url: &str, username: &str) {
    let body = SharedUserRequest { username };
    let token = store.token();
    let path = format!("/api/board/{url}/shared/");

    match api.post::<_, SharedUserResponse>(&path, &body, token.as_deref()).await {
        Ok(shared) => {
            info!(user_id = shared.user.id, "board shared");
            store.dispatch(Event::Flash(FlashMessage::new("share_board", "Board Shared")));
            store.dispatch(Event::SharedUserAdded(shared.user));
        }
        Err(err) => dispatch_api_failure(store, &err),
    }
}

/// Revoke another user's access to the loaded board.
pub async fn remove_shared_user(api: &ApiClient, store: &Store, url: &str, user_id: i64) {
    let token = store.token();

    match api.delete(&format!("/api/board/{url}/shared/{user_id}"), token.as_deref()).await {
        Ok(()) => {
            info!(user_id, "board unshared");
            store.dispatch(Event::SharedUserRemoved { id: user_id });
        }
        Err(err) => dispatch_api_failure(store, &err),
    }
}
