//! Optional SQLite write-behind for the in-memory board.
//!
//! The board is always updated first. Writes to the database happen after,
//! and a failed write is logged and otherwise ignored: the board is not rolled
//! back, so the database may fall behind until the next successful write of
//! the same data.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    board::Board,
    db::initialize,
    transaction::{get_all_transactions, get_last_issued_id, get_pinned_ids},
};

/// Where board changes are persisted, if anywhere.
#[derive(Debug, Clone, Default)]
pub struct Store {
    connection: Option<Arc<Mutex<Connection>>>,
}

impl Store {
    /// A store that keeps nothing, the board lives only as long as the process.
    pub fn memory_only() -> Self {
        Self { connection: None }
    }

    /// A store backed by `connection`. Creates the tables if needed.
    ///
    /// # Errors
    /// Returns an error if the tables could not be created.
    pub fn sqlite(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self {
            connection: Some(Arc::new(Mutex::new(connection))),
        })
    }

    /// Load the saved board, or an empty board for a memory-only store.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the connection lock is poisoned,
    /// - or [Error::SqlError] if the rows could not be read.
    pub fn load_board(&self) -> Result<Board, Error> {
        let Some(connection) = &self.connection else {
            return Ok(Board::new());
        };

        let connection = connection.lock().map_err(|_| Error::DatabaseLockError)?;
        let transactions = get_all_transactions(&connection)?;
        let pinned = get_pinned_ids(&connection)?;
        let last_issued_id = get_last_issued_id(&connection)?;

        let board = Board::from_parts(transactions, pinned, last_issued_id);
        tracing::info!(
            "Loaded {} transactions and {} pins from the database",
            board.len(),
            board.pins().len()
        );

        Ok(board)
    }

    /// Run `operation` against the database, logging any failure.
    ///
    /// `description` names the change in the log, e.g. "delete transaction 3".
    /// Returns whether the write succeeded. Memory-only stores always succeed.
    pub fn write<F>(&self, description: &str, operation: F) -> bool
    where
        F: FnOnce(&Connection) -> Result<(), Error>,
    {
        let Some(connection) = &self.connection else {
            return true;
        };

        let result = match connection.lock() {
            Ok(connection) => operation(&connection),
            Err(_) => Err(Error::DatabaseLockError),
        };

        match result {
            Ok(()) => {
                tracing::debug!("Persisted {description}");
                true
            }
            Err(error) => {
                tracing::error!(
                    "Could not persist {description}, the database is now out of date: {error}"
                );
                false
            }
        }
    }
}
