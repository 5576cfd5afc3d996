use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    Error,
    app_state::BoardState,
    transaction::{Transaction, TransactionId},
};

/// Every transaction on the board with the pinned IDs.
#[derive(Debug, Serialize)]
pub struct TransactionList {
    /// Category by category, in board order.
    pub transactions: Vec<Transaction>,
    /// In the order they were pinned.
    pub pinned: Vec<TransactionId>,
}

/// A route handler that returns the board's transactions as JSON.
pub async fn list_transactions_endpoint(
    State(state): State<BoardState>,
) -> Result<Response, Error> {
    let board = state
        .board
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire board lock: {error}"))
        .map_err(|_| Error::BoardLockError)?;

    let list = TransactionList {
        transactions: board.all_transactions().cloned().collect(),
        pinned: board.pins().iter().collect(),
    };

    Ok(Json(list).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};

    use crate::{
        app_state::BoardState,
        board::{Board, test_support::add},
        cadence::{Cadence, Flow},
        category::CategoryId,
        transaction::list_transactions_endpoint,
    };

    #[tokio::test]
    async fn lists_transactions_and_pins() {
        let mut board = Board::new();
        add(
            &mut board,
            "Salary",
            3000.0,
            Cadence::Monthly,
            Flow::Income,
            CategoryId::Earnings,
        );
        let rent = add(
            &mut board,
            "Rent",
            300.0,
            Cadence::Weekly,
            Flow::Expense,
            CategoryId::Obligations,
        );
        board.toggle_pin(rent).unwrap();

        let response = list_transactions_endpoint(State(BoardState::for_board(board)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["transactions"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["transactions"][1]["cadence"], "weekly");
        assert_eq!(json["transactions"][1]["category_id"], "obligations");
        assert_eq!(json["pinned"], serde_json::json!([rent]));
    }
}
