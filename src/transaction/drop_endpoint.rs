//! Finishes a drag on the board.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    Error,
    app_state::BoardState,
    board_page::board_partial,
    category::CategoryId,
    drag::{DragAction, DragState, DropTarget},
    transaction::{TransactionId, delete_transaction, move_transaction},
};

/// Where the dragged transaction came from and where it was dropped.
#[derive(Debug, Deserialize)]
pub struct DropForm {
    /// The category the drag started in.
    pub origin: CategoryId,
    /// A category ID, or `trash`.
    pub target: DropTarget,
}

/// A route handler for dropping a transaction onto a category or the trash.
///
/// Dropping onto the origin category changes nothing. A stale origin responds
/// with 409 Conflict and a missing transaction with 404 Not Found.
pub async fn drop_transaction_endpoint(
    State(state): State<BoardState>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<DropForm>,
) -> Response {
    // Replays the browser's gesture so `drop_on` decides what the drop means.
    // The hover step only feeds the debug log.
    let mut drag = DragState::default();
    drag.start(form.origin, transaction_id);
    drag.hover(Some(form.target));
    tracing::debug!(
        "transaction {transaction_id} released over {:?}",
        drag.hover_target()
    );
    let action = drag.drop_on(form.target);

    let mut board = match state.board.lock() {
        Ok(board) => board,
        Err(error) => {
            tracing::error!("could not acquire board lock: {error}");
            return Error::BoardLockError.into_alert_response();
        }
    };

    let Some(action) = action else {
        tracing::debug!("transaction {transaction_id} dropped on its own category");
        return board_partial(&board).into_response();
    };

    if let Err(error) = action.apply(&mut board) {
        tracing::error!("could not drop transaction {transaction_id} on {}: {error}", form.target);
        return error.into_alert_response();
    }

    tracing::info!(
        "Dropped transaction {} on {}",
        action.transaction_id(),
        form.target
    );

    match action {
        DragAction::Move { to, .. } => {
            state
                .store
                .write(&format!("move transaction {transaction_id}"), |connection| {
                    move_transaction(transaction_id, to, connection)
                });
        }
        DragAction::Delete { .. } => {
            state
                .store
                .write(&format!("delete transaction {transaction_id}"), |connection| {
                    delete_transaction(transaction_id, connection).map(|_| ())
                });
        }
    }

    board_partial(&board).into_response()
}
