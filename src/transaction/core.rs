//! Defines the core data model for transactions.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    cadence::{Cadence, Flow, normalize},
    category::CategoryId,
};

/// Database and board identifier for a transaction.
pub type TransactionId = i64;

/// A recurring or one-off movement of money, e.g. wages, rent or a gift.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short name for the transaction, e.g. "Rent".
    pub label: String,
    /// The amount of money per occurrence. Always positive, see [Transaction::flow].
    pub amount: f64,
    /// How often the transaction recurs.
    pub cadence: Cadence,
    /// Whether the money comes in, goes out, or is put aside.
    pub flow: Flow,
    /// The category the transaction currently belongs to.
    pub category_id: CategoryId,
    /// Free text notes. May be empty.
    pub note: String,
    /// When the transaction (first) happens.
    pub date: Date,
    /// When the transaction was logged.
    pub created_at: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        label: &str,
        amount: f64,
        cadence: Cadence,
        flow: Flow,
        category_id: CategoryId,
    ) -> TransactionBuilder {
        TransactionBuilder {
            label: label.to_owned(),
            amount,
            cadence,
            flow,
            category_id,
            note: String::new(),
            date: None,
        }
    }

    /// The unsigned monthly-equivalent amount.
    pub fn monthly_amount(&self) -> f64 {
        normalize(self.amount, self.cadence)
    }

    /// The monthly-equivalent amount with the category sign applied.
    ///
    /// Income is negative so that a category total reads as the net monthly burden.
    pub fn signed_monthly_amount(&self) -> f64 {
        self.flow.category_sign() * self.monthly_amount()
    }
}

/// A builder for creating [Transaction] instances.
///
/// The builder holds unvalidated user input. Call [TransactionBuilder::finalize]
/// with an ID and creation time to validate it and get a [Transaction].
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    pub label: String,
    pub amount: f64,
    pub cadence: Cadence,
    pub flow: Flow,
    pub category_id: CategoryId,
    pub note: String,
    /// Defaults to the creation date when `None`.
    pub date: Option<Date>,
}

impl TransactionBuilder {
    /// Set the note for the transaction.
    pub fn note(mut self, note: &str) -> Self {
        self.note = note.to_owned();
        self
    }

    /// Set the date for the transaction.
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Validate the builder and create the transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if the amount is not a finite number greater than zero,
    /// - or [Error::EmptyLabel] if the label is empty or only whitespace.
    pub fn finalize(
        self,
        id: TransactionId,
        created_at: OffsetDateTime,
    ) -> Result<Transaction, Error> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        let label = self.label.trim();

        if label.is_empty() {
            return Err(Error::EmptyLabel);
        }

        Ok(Transaction {
            id,
            label: label.to_owned(),
            amount: self.amount,
            cadence: self.cadence,
            flow: self.flow,
            category_id: self.category_id,
            note: self.note.trim().to_owned(),
            date: self.date.unwrap_or_else(|| created_at.date()),
            created_at,
        })
    }
}
