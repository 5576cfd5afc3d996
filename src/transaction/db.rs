//! Database queries for transactions and the pin set.
//!
//! Row order within a category is kept in the `position` column so the board
//! can be rebuilt in the same order it was left in.

use rusqlite::{
    Connection, Row, ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};

use crate::{
    Error,
    cadence::{Cadence, Flow},
    category::CategoryId,
    transaction::{Transaction, TransactionId},
};

macro_rules! text_column {
    ($type:ty) => {
        impl ToSql for $type {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $type {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
            }
        }
    };
}

text_column!(Cadence);
text_column!(Flow);
text_column!(CategoryId);

/// Insert `transaction` at the end of its category.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is some SQL error,
/// e.g. the ID is already taken.
pub fn insert_transaction(transaction: &Transaction, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO \"transaction\"
            (id, label, amount, cadence, flow, category, position, note, date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6,
            (SELECT COALESCE(MAX(position), -1) + 1 FROM \"transaction\" WHERE category = ?6),
            ?7, ?8, ?9)",
        (
            transaction.id,
            &transaction.label,
            transaction.amount,
            transaction.cadence,
            transaction.flow,
            transaction.category_id,
            &transaction.note,
            transaction.date,
            transaction.created_at,
        ),
    )?;

    Ok(())
}

/// Move a transaction to the end of the category `target`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a stored transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn move_transaction(
    id: TransactionId,
    target: CategoryId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE \"transaction\"
         SET category = ?1,
             position = (SELECT COALESCE(MAX(position), -1) + 1 FROM \"transaction\" WHERE category = ?1)
         WHERE id = ?2",
        (target, id),
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

type RowsAffected = usize;

/// Delete a transaction and its pin, if any.
///
/// Deleting a transaction that does not exist affects zero rows and is not an error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection.execute(
        "DELETE FROM pinned_transaction WHERE transaction_id = ?1",
        [id],
    )?;

    connection
        .execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])
        .map_err(Error::from)
}

/// Retrieve every transaction grouped by category and ordered by position.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, label, amount, cadence, flow, category, note, date, created_at
             FROM \"transaction\"
             ORDER BY category, position",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// The highest transaction ID ever stored, including deleted transactions.
///
/// Returns 0 when no transaction has been stored yet.
pub fn get_last_issued_id(connection: &Connection) -> Result<TransactionId, Error> {
    connection
        .query_row(
            "SELECT COALESCE(
                (SELECT seq FROM sqlite_sequence WHERE name = 'transaction'),
                0
            )",
            [],
            |row| row.get(0),
        )
        .map_err(Error::from)
}

/// Add `id` to the pin set. Pinning an already pinned transaction does nothing.
pub fn pin_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT OR IGNORE INTO pinned_transaction (transaction_id, pinned_order)
         VALUES (?1, (SELECT COALESCE(MAX(pinned_order), 0) + 1 FROM pinned_transaction))",
        [id],
    )?;

    Ok(())
}

/// Remove `id` from the pin set.
pub fn unpin_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "DELETE FROM pinned_transaction WHERE transaction_id = ?1",
        [id],
    )?;

    Ok(())
}

/// Retrieve the pinned transaction IDs in the order they were pinned.
pub fn get_pinned_ids(connection: &Connection) -> Result<Vec<TransactionId>, Error> {
    connection
        .prepare("SELECT transaction_id FROM pinned_transaction ORDER BY pinned_order")?
        .query_map([], |row| row.get(0))?
        .map(|maybe_id| maybe_id.map_err(Error::from))
        .collect()
}

/// Create the transaction and pin tables in the database.
///
/// # Errors
/// Returns an error if the tables cannot be created or if there is an SQL error.
pub fn create_transaction_tables(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            label TEXT NOT NULL,
            amount REAL NOT NULL CHECK (amount > 0),
            cadence TEXT NOT NULL,
            flow TEXT NOT NULL,
            category TEXT NOT NULL,
            position INTEGER NOT NULL,
            note TEXT NOT NULL,
            date TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_category_position
            ON \"transaction\"(category, position);

        CREATE TABLE IF NOT EXISTS pinned_transaction (
            transaction_id INTEGER PRIMARY KEY,
            pinned_order INTEGER NOT NULL,
            FOREIGN KEY(transaction_id) REFERENCES \"transaction\"(id) ON UPDATE CASCADE ON DELETE CASCADE
        );",
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        label: row.get(1)?,
        amount: row.get(2)?,
        cadence: row.get(3)?,
        flow: row.get(4)?,
        category_id: row.get(5)?,
        note: row.get(6)?,
        date: row.get(7)?,
        created_at: row.get(8)?,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::datetime;

    use crate::{
        Error,
        cadence::{Cadence, Flow},
        category::CategoryId,
        db::initialize,
        transaction::{
            Transaction,
            db::{
                delete_transaction, get_all_transactions, get_pinned_ids,
                insert_transaction, move_transaction, pin_transaction, unpin_transaction,
            },
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn test_transaction(id: i64, label: &str, category_id: CategoryId) -> Transaction {
        Transaction::build(label, 10.0, Cadence::Monthly, Flow::Expense, category_id)
            .note("note")
            .finalize(id, datetime!(2025-06-01 09:30 UTC))
            .unwrap()
    }

    #[test]
    fn insert_then_get_returns_same_transaction() {
        let conn = get_test_connection();
        let want = test_transaction(1, "Rent", CategoryId::Obligations);

        insert_transaction(&want, &conn).unwrap();

        assert_eq!(get_all_transactions(&conn), Ok(vec![want]));
    }

    #[test]
    fn moved_transaction_goes_to_end_of_target() {
        let conn = get_test_connection();
        insert_transaction(&test_transaction(1, "Gym", CategoryId::Lifestyle), &conn).unwrap();
        insert_transaction(&test_transaction(2, "Water", CategoryId::Essentials), &conn).unwrap();

        move_transaction(1, CategoryId::Essentials, &conn).unwrap();

        let got: Vec<_> = get_all_transactions(&conn)
            .unwrap()
            .into_iter()
            .map(|transaction| (transaction.id, transaction.category_id))
            .collect();
        assert_eq!(
            got,
            vec![(2, CategoryId::Essentials), (1, CategoryId::Essentials)]
        );
    }

    #[test]
    fn move_missing_transaction_returns_not_found() {
        let conn = get_test_connection();

        assert_eq!(
            move_transaction(9, CategoryId::Giving, &conn),
            Err(Error::NotFound)
        );
    }

    #[test]
    fn delete_removes_pin_and_is_idempotent() {
        let conn = get_test_connection();
        insert_transaction(&test_transaction(1, "Gym", CategoryId::Lifestyle), &conn).unwrap();
        pin_transaction(1, &conn).unwrap();

        assert_eq!(delete_transaction(1, &conn), Ok(1));
        assert_eq!(delete_transaction(1, &conn), Ok(0));
        assert_eq!(get_pinned_ids(&conn), Ok(vec![]));
    }

    #[test]
    fn pins_keep_insertion_order() {
        let conn = get_test_connection();
        for id in 1..=3 {
            insert_transaction(&test_transaction(id, "x", CategoryId::Giving), &conn).unwrap();
        }

        pin_transaction(3, &conn).unwrap();
        pin_transaction(1, &conn).unwrap();
        pin_transaction(3, &conn).unwrap();
        pin_transaction(2, &conn).unwrap();
        unpin_transaction(1, &conn).unwrap();

        assert_eq!(get_pinned_ids(&conn), Ok(vec![3, 2]));
    }
}
