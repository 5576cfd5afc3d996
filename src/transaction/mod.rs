//! Transactions: the data model, database queries, the form, and the route handlers.

mod core;
mod create_endpoint;
mod db;
mod delete_endpoint;
mod drop_endpoint;
mod form;
mod list_endpoint;
mod pin_endpoint;

pub use core::{Transaction, TransactionBuilder, TransactionId};
pub use create_endpoint::create_transaction_endpoint;
pub use db::{
    create_transaction_tables, delete_transaction, get_all_transactions, get_last_issued_id,
    get_pinned_ids, insert_transaction, move_transaction, pin_transaction, unpin_transaction,
};
pub use delete_endpoint::delete_transaction_endpoint;
pub use drop_endpoint::drop_transaction_endpoint;
pub use form::new_transaction_form;
pub use list_endpoint::list_transactions_endpoint;
pub use pin_endpoint::toggle_pin_endpoint;
