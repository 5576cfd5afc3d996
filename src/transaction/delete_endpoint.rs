use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::BoardState,
    board_page::board_partial,
    transaction::{TransactionId, delete_transaction},
};

/// A route handler for deleting a transaction, responds with the updated board.
///
/// Deleting a transaction that is already gone is not an error, the board is
/// returned unchanged.
pub async fn delete_transaction_endpoint(
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

    if board.delete(transaction_id).is_none() {
        tracing::debug!("transaction {transaction_id} was already deleted");
        return board_partial(&board).into_response();
    }

    tracing::info!("Deleted transaction {transaction_id}");

    state.store.write(
        &format!("delete transaction {transaction_id}"),
        |connection| delete_transaction(transaction_id, connection).map(|_| ()),
    );

    board_partial(&board).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;

    use crate::{
        app_state::BoardState,
        board::{Board, test_support::add},
        cadence::{Cadence, Flow},
        category::CategoryId,
        store::Store,
        transaction::{delete_transaction_endpoint, insert_transaction},
    };

    #[tokio::test]
    async fn deletes_transaction_and_pin() {
        let mut board = Board::new();
        let id = add(
            &mut board,
            "Gym",
            15.0,
            Cadence::Weekly,
            Flow::Expense,
            CategoryId::Lifestyle,
        );
        board.toggle_pin(id).unwrap();
        let state = BoardState::for_board(board);

        let response = delete_transaction_endpoint(State(state.clone()), Path(id)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let board = state.board.lock().unwrap();
        assert!(board.find(id).is_none());
        assert!(!board.is_pinned(id));
    }

    #[tokio::test]
    async fn deleting_twice_is_ok() {
        let mut board = Board::new();
        let id = add(
            &mut board,
            "Gym",
            15.0,
            Cadence::Weekly,
            Flow::Expense,
            CategoryId::Lifestyle,
        );
        let state = BoardState::for_board(board);

        delete_transaction_endpoint(State(state.clone()), Path(id)).await;
        let response = delete_transaction_endpoint(State(state.clone()), Path(id)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.board.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn removes_transaction_from_database() {
        let store = Store::sqlite(Connection::open_in_memory().unwrap()).unwrap();
        let mut board = Board::new();
        let id = add(
            &mut board,
            "Gym",
            15.0,
            Cadence::Weekly,
            Flow::Expense,
            CategoryId::Lifestyle,
        );
        let transaction = board.find(id).cloned().unwrap();
        store.write("seed", |connection| insert_transaction(&transaction, connection));
        let mut state = BoardState::for_board(board);
        state.store = store.clone();

        delete_transaction_endpoint(State(state), Path(id)).await;

        assert!(store.load_board().unwrap().is_empty());
    }
}
