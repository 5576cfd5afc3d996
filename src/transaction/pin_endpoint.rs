use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::BoardState,
    board_page::board_partial,
    transaction::{TransactionId, pin_transaction, unpin_transaction},
};

/// A route handler that pins an unpinned transaction or unpins a pinned one.
///
/// Responds with the updated board.
pub async fn toggle_pin_endpoint(
    State(state): State<BoardState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut board = match state.board.lock() {
        Ok(board) => board,
        Err(error) => {
            tracing::error!("could not acquire board lock: {error}");
            return Error::BoardLockError.into_alert_response();
        }
    };

    let is_pinned = match board.toggle_pin(transaction_id) {
        Ok(is_pinned) => is_pinned,
        Err(error) => {
            tracing::error!("could not toggle pin for transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    };

    if is_pinned {
        state
            .store
            .write(&format!("pin transaction {transaction_id}"), |connection| {
                pin_transaction(transaction_id, connection)
            });
    } else {
        state
            .store
            .write(&format!("unpin transaction {transaction_id}"), |connection| {
                unpin_transaction(transaction_id, connection)
            });
    }

    board_partial(&board).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        app_state::BoardState,
        board::{Board, test_support::add},
        cadence::{Cadence, Flow},
        category::CategoryId,
        transaction::toggle_pin_endpoint,
    };

    #[tokio::test]
    async fn toggling_twice_unpins() {
        let mut board = Board::new();
        let id = add(
            &mut board,
            "Rent",
            300.0,
            Cadence::Weekly,
            Flow::Expense,
            CategoryId::Obligations,
        );
        let state = BoardState::for_board(board);

        let response = toggle_pin_endpoint(State(state.clone()), Path(id)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.board.lock().unwrap().is_pinned(id));

        toggle_pin_endpoint(State(state.clone()), Path(id)).await;
        assert!(!state.board.lock().unwrap().is_pinned(id));
    }

    #[tokio::test]
    async fn pinning_missing_transaction_is_not_found() {
        let state = BoardState::for_board(Board::new());

        let response = toggle_pin_endpoint(State(state.clone()), Path(42)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.board.lock().unwrap().pins().len(), 0);
    }
}
