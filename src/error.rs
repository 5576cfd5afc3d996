//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, category::CategoryId, internal_server_error::InternalServerError,
    not_found::NotFoundError, transaction::TransactionId,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction amount was zero, negative or not a finite number.
    ///
    /// Amounts are always stored as positive magnitudes, the sign comes from
    /// the transaction's flow.
    #[error("{0} is not a valid amount, amounts must be greater than zero")]
    InvalidAmount(f64),

    /// An empty string was used as a transaction label.
    #[error("Transaction label cannot be empty")]
    EmptyLabel,

    /// The text did not name one of the supported cadences.
    #[error("\"{0}\" is not a valid cadence")]
    InvalidCadence(String),

    /// The text did not name one of the supported flows.
    #[error("\"{0}\" is not a valid flow")]
    InvalidFlow(String),

    /// The text did not name one of the fixed categories.
    #[error("\"{0}\" is not a valid category")]
    InvalidCategory(String),

    /// A drag started from a category that no longer holds the transaction.
    ///
    /// This happens when the page is stale, e.g. the transaction was moved
    /// in another tab.
    #[error("transaction {0} is not in the category {1}")]
    NotInCategory(TransactionId, CategoryId),

    /// Tried to move a transaction that is not on the board.
    #[error("tried to move a transaction that is not on the board")]
    MoveMissingTransaction,

    /// Tried to pin a transaction that is not on the board.
    #[error("tried to pin a transaction that is not on the board")]
    PinMissingTransaction,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The CSV document could not be written.
    #[error("could not write CSV: {0}")]
    CsvError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// Could not acquire the lock on the in-memory board
    #[error("could not acquire the board lock")]
    BoardLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::CsvError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => {
                InternalServerError::invalid_timezone(&timezone).into_response()
            }
            Error::DatabaseLockError | Error::BoardLockError => {
                InternalServerError::default().into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidTimezoneError(timezone) => {
                let page = InternalServerError::invalid_timezone(&timezone);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: page.description,
                        details: page.fix,
                    },
                )
            }
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!("{amount} is not a valid amount. Enter a number above zero."),
                },
            ),
            Error::EmptyLabel => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Missing label".to_owned(),
                    details: "Give the transaction a label so you can find it later.".to_owned(),
                },
            ),
            error @ (Error::InvalidCadence(_)
            | Error::InvalidFlow(_)
            | Error::InvalidCategory(_)) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid transaction details".to_owned(),
                    details: error.to_string(),
                },
            ),
            Error::NotInCategory(_, _) => (
                StatusCode::CONFLICT,
                Alert::Error {
                    message: "Could not move transaction".to_owned(),
                    details: "The transaction has moved since the page loaded. \
                    Refresh the page and try again."
                        .to_owned(),
                },
            ),
            Error::MoveMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not move transaction".to_owned(),
                    details: "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has been deleted."
                        .to_owned(),
                },
            ),
            Error::PinMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not pin transaction".to_owned(),
                    details: "The transaction could not be found.".to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
