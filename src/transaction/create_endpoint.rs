//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    app_state::BoardState,
    cadence::{Cadence, Flow},
    category::CategoryId,
    endpoints,
    timezone::local_now,
    transaction::{Transaction, insert_transaction},
};

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// A short name, e.g. "Rent".
    pub label: String,
    /// The amount per occurrence in dollars.
    pub amount: f64,
    pub cadence: Cadence,
    pub flow: Flow,
    pub category: CategoryId,
    #[serde(default)]
    pub note: Option<String>,
    /// Defaults to today when left empty.
    #[serde(default)]
    pub date: Option<Date>,
}

/// A route handler for creating a new transaction, redirects to the board on success.
pub async fn create_transaction_endpoint(
    State(state): State<BoardState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let now_local_time = match local_now(&state.local_timezone) {
        Ok(now) => now,
        Err(error) => return error.into_alert_response(),
    };

    let mut builder = Transaction::build(
        &form.label,
        form.amount,
        form.cadence,
        form.flow,
        form.category,
    )
    .note(form.note.as_deref().unwrap_or_default());

    if let Some(date) = form.date {
        builder = builder.date(date);
    }

    let mut board = match state.board.lock() {
        Ok(board) => board,
        Err(error) => {
            tracing::error!("could not acquire board lock: {error}");
            return Error::BoardLockError.into_alert_response();
        }
    };

    // The board lock is held until the insert is written so a delete cannot
    // reach the database ahead of it.
    let transaction = match board.add(builder, now_local_time) {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            return error.into_alert_response();
        }
    };

    tracing::info!(
        "Created transaction {} \"{}\" in {}",
        transaction.id,
        transaction.label,
        transaction.category_id
    );

    state.store.write(
        &format!("create transaction {}", transaction.id),
        |connection| insert_transaction(transaction, connection),
    );

    (
        HxRedirect(endpoints::BOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::{Path, State},
        http::{Response, StatusCode},
    };
    use axum_extra::extract::Form;
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        app_state::BoardState,
        board::Board,
        cadence::{Cadence, Flow},
        category::CategoryId,
        endpoints,
        store::Store,
        test_utils::assert_hx_redirect,
        transaction::{
            create_endpoint::TransactionForm, create_transaction_endpoint,
            delete_transaction_endpoint,
        },
    };

    fn rent_form() -> TransactionForm {
        TransactionForm {
            label: "Rent".to_owned(),
            amount: 450.0,
            cadence: Cadence::Weekly,
            flow: Flow::Expense,
            category: CategoryId::Obligations,
            note: None,
            date: Some(date!(2025 - 01 - 15)),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = BoardState::for_board(Board::new());

        let response = create_transaction_endpoint(State(state.clone()), Form(rent_form())).await;

        assert_redirects_to_board(response);
        let board = state.board.lock().unwrap();
        let transaction = board.find(1).expect("transaction should be on the board");
        assert_eq!(transaction.label, "Rent");
        assert_eq!(transaction.date, date!(2025 - 01 - 15));
        assert_eq!(board.transactions(CategoryId::Obligations).len(), 1);
    }

    #[tokio::test]
    async fn persists_new_transaction() {
        let store = Store::sqlite(Connection::open_in_memory().unwrap()).unwrap();
        let mut state = BoardState::for_board(Board::new());
        state.store = store.clone();

        let response = create_transaction_endpoint(State(state), Form(rent_form())).await;

        assert_redirects_to_board(response);
        let reloaded = store.load_board().unwrap();
        assert_eq!(reloaded.find(1).map(|t| t.amount), Some(450.0));
    }

    #[tokio::test]
    async fn created_then_deleted_transaction_stays_deleted_after_reload() {
        let store = Store::sqlite(Connection::open_in_memory().unwrap()).unwrap();
        let mut state = BoardState::for_board(Board::new());
        state.store = store.clone();

        create_transaction_endpoint(State(state.clone()), Form(rent_form())).await;
        delete_transaction_endpoint(State(state.clone()), Path(1)).await;

        assert!(state.board.lock().unwrap().is_empty());
        assert!(store.load_board().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_invalid_amount() {
        let state = BoardState::for_board(Board::new());
        let form = TransactionForm {
            amount: 0.0,
            ..rent_form()
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.board.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_blank_label() {
        let state = BoardState::for_board(Board::new());
        let form = TransactionForm {
            label: "   ".to_owned(),
            ..rent_form()
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.board.lock().unwrap().is_empty());
    }

    #[track_caller]
    fn assert_redirects_to_board(response: Response<Body>) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::BOARD_VIEW);
    }
}
