//! The in-memory board: every category with its ordered transactions, plus the pin set.
//!
//! The board is the source of truth for the running app. Every mutation
//! (add, move, delete, pin) goes through it and is applied in full before the
//! lock guarding it is released, so readers never observe a half-applied
//! update.

use time::OffsetDateTime;

use crate::{
    Error,
    category::CategoryId,
    summary::{MonthlySummary, summarize},
    transaction::{Transaction, TransactionBuilder, TransactionId},
};

/// The set of pinned transaction IDs, iterated in the order they were pinned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinSet {
    ids: Vec<TransactionId>,
}

impl PinSet {
    pub fn contains(&self, id: TransactionId) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id` to the set. Returns `false` if it was already present.
    pub fn insert(&mut self, id: TransactionId) -> bool {
        if self.contains(id) {
            return false;
        }

        self.ids.push(id);
        true
    }

    /// Remove `id` from the set. Returns `false` if it was not present.
    pub fn remove(&mut self, id: TransactionId) -> bool {
        let len_before = self.ids.len();
        self.ids.retain(|&pinned| pinned != id);
        self.ids.len() != len_before
    }

    pub fn iter(&self) -> impl Iterator<Item = TransactionId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

/// The result of asking the board to move a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The transaction was appended to the target category.
    Moved,
    /// The target was the origin, nothing changed.
    Unchanged,
}

/// Categories with their transactions and the pin set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    // Indexed by `CategoryId as usize`.
    columns: [Vec<Transaction>; CategoryId::ALL.len()],
    pins: PinSet,
    /// The highest ID ever handed out. Never goes down, so deleted IDs are not reused.
    last_id: TransactionId,
}

impl Board {
    /// Create an empty board with every category seeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a board from stored transactions and pins.
    ///
    /// Transactions keep their relative order within each category. Pins
    /// that refer to unknown transactions are dropped. `last_issued_id` is the
    /// highest ID ever handed out, including deleted transactions.
    pub fn from_parts(
        transactions: impl IntoIterator<Item = Transaction>,
        pinned: impl IntoIterator<Item = TransactionId>,
        last_issued_id: TransactionId,
    ) -> Self {
        let mut board = Self::new();
        board.last_id = last_issued_id;

        for transaction in transactions {
            board.last_id = board.last_id.max(transaction.id);
            board.columns[transaction.category_id as usize].push(transaction);
        }

        for id in pinned {
            if board.find(id).is_some() {
                board.pins.insert(id);
            } else {
                tracing::warn!("dropping pin for unknown transaction {id}");
            }
        }

        board
    }

    /// The ID the next created transaction will get.
    pub fn next_id(&self) -> TransactionId {
        self.last_id + 1
    }

    /// Validate `builder` and append the new transaction to its category.
    ///
    /// # Errors
    /// Returns the validation error from [TransactionBuilder::finalize]. The
    /// board is unchanged on error.
    pub fn add(
        &mut self,
        builder: TransactionBuilder,
        created_at: OffsetDateTime,
    ) -> Result<&Transaction, Error> {
        let transaction = builder.finalize(self.next_id(), created_at)?;
        self.last_id = transaction.id;
        let column = &mut self.columns[transaction.category_id as usize];
        column.push(transaction);

        Ok(&column[column.len() - 1])
    }

    /// The transactions in `category`, in board order.
    pub fn transactions(&self, category: CategoryId) -> &[Transaction] {
        &self.columns[category as usize]
    }

    /// Every category with its transactions, in category order.
    pub fn categories(&self) -> impl Iterator<Item = (CategoryId, &[Transaction])> + '_ {
        CategoryId::ALL
            .into_iter()
            .map(|category| (category, self.transactions(category)))
    }

    /// Every transaction, category by category.
    pub fn all_transactions(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.columns.iter().flatten()
    }

    pub fn find(&self, id: TransactionId) -> Option<&Transaction> {
        self.all_transactions()
            .find(|transaction| transaction.id == id)
    }

    /// Move transaction `id` from `from` to the end of `to`.
    ///
    /// Moving to the same category is a no-op and does not touch either list.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MoveMissingTransaction] if `id` is not on the board,
    /// - or [Error::NotInCategory] if `id` is on the board but not in `from`.
    pub fn move_transaction(
        &mut self,
        id: TransactionId,
        from: CategoryId,
        to: CategoryId,
    ) -> Result<MoveOutcome, Error> {
        if from == to {
            return Ok(MoveOutcome::Unchanged);
        }

        let origin = &mut self.columns[from as usize];
        let Some(index) = origin.iter().position(|transaction| transaction.id == id) else {
            return Err(match self.find(id) {
                Some(_) => Error::NotInCategory(id, from),
                None => Error::MoveMissingTransaction,
            });
        };

        let mut transaction = origin.remove(index);
        transaction.category_id = to;
        self.columns[to as usize].push(transaction);

        Ok(MoveOutcome::Moved)
    }

    /// Delete transaction `id` and unpin it.
    ///
    /// Returns the deleted transaction, or `None` if it was already gone.
    pub fn delete(&mut self, id: TransactionId) -> Option<Transaction> {
        self.pins.remove(id);

        self.columns.iter_mut().find_map(|column| {
            column
                .iter()
                .position(|transaction| transaction.id == id)
                .map(|index| column.remove(index))
        })
    }

    /// Pin `id` if it is not pinned, otherwise unpin it.
    ///
    /// Returns whether the transaction is pinned afterwards.
    ///
    /// # Errors
    /// Returns [Error::PinMissingTransaction] if `id` is not on the board.
    pub fn toggle_pin(&mut self, id: TransactionId) -> Result<bool, Error> {
        if self.find(id).is_none() {
            return Err(Error::PinMissingTransaction);
        }

        if self.pins.remove(id) {
            Ok(false)
        } else {
            self.pins.insert(id);
            Ok(true)
        }
    }

    pub fn is_pinned(&self, id: TransactionId) -> bool {
        self.pins.contains(id)
    }

    pub fn pins(&self) -> &PinSet {
        &self.pins
    }

    /// The pinned transactions in pin order.
    pub fn pinned_transactions(&self) -> Vec<&Transaction> {
        self.pins.iter().filter_map(|id| self.find(id)).collect()
    }

    /// The number of transactions across all categories.
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Aggregate the board into monthly figures.
    pub fn summary(&self) -> MonthlySummary {
        summarize(self.categories())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use time::macros::datetime;

    use crate::{
        board::Board,
        cadence::{Cadence, Flow},
        category::CategoryId,
        transaction::{Transaction, TransactionId},
    };

    /// Add a transaction to `board` and return its ID.
    #[track_caller]
    pub(crate) fn add(
        board: &mut Board,
        label: &str,
        amount: f64,
        cadence: Cadence,
        flow: Flow,
        category: CategoryId,
    ) -> TransactionId {
        board
            .add(
                Transaction::build(label, amount, cadence, flow, category),
                datetime!(2025-05-01 12:00 UTC),
            )
            .expect("could not add test transaction")
            .id
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::{
        Error,
        board::{Board, MoveOutcome, test_support::add},
        cadence::{Cadence, Flow},
        category::CategoryId,
        transaction::{Transaction, TransactionId},
    };

    fn ids(board: &Board, category: CategoryId) -> Vec<i64> {
        board
            .transactions(category)
            .iter()
            .map(|transaction| transaction.id)
            .collect()
    }

    #[test]
    fn new_board_has_every_category_empty() {
        let board = Board::new();

        assert_eq!(board.categories().count(), CategoryId::ALL.len());
        assert!(board.is_empty());
        assert_eq!(board.next_id(), 1);
    }

    #[test]
    fn add_assigns_increasing_ids() {
        let mut board = Board::new();

        let first = add(
            &mut board,
            "A",
            1.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Giving,
        );
        let second = add(
            &mut board,
            "B",
            1.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Future,
        );

        assert_eq!((first, second), (1, 2));
    }

    #[test]
    fn add_leaves_board_unchanged_on_invalid_input() {
        let mut board = Board::new();

        let result = board.add(
            Transaction::build(
                "",
                5.0,
                Cadence::Weekly,
                Flow::Expense,
                CategoryId::Essentials,
            ),
            datetime!(2025-05-01 12:00 UTC),
        );

        assert!(matches!(result, Err(Error::EmptyLabel)));
        assert!(board.is_empty());
    }

    #[test]
    fn move_changes_counts_by_one_and_keeps_identity() {
        let mut board = Board::new();
        let id = add(
            &mut board,
            "Gym",
            60.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Lifestyle,
        );
        add(
            &mut board,
            "Movies",
            20.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Lifestyle,
        );
        add(
            &mut board,
            "Bus",
            30.0,
            Cadence::Weekly,
            Flow::Expense,
            CategoryId::Essentials,
        );
        let before = board.find(id).cloned().unwrap();

        let outcome = board
            .move_transaction(id, CategoryId::Lifestyle, CategoryId::Essentials)
            .unwrap();

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(board.transactions(CategoryId::Lifestyle).len(), 1);
        assert_eq!(board.transactions(CategoryId::Essentials).len(), 2);
        assert_eq!(ids(&board, CategoryId::Essentials).last(), Some(&id));
        let after = board.find(id).unwrap();
        assert_eq!(after.category_id, CategoryId::Essentials);
        assert_eq!(after.label, before.label);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn move_to_own_category_is_a_no_op() {
        let mut board = Board::new();
        let first = add(
            &mut board,
            "A",
            1.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Giving,
        );
        let second = add(
            &mut board,
            "B",
            1.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Giving,
        );
        let before = board.clone();

        let outcome = board
            .move_transaction(first, CategoryId::Giving, CategoryId::Giving)
            .unwrap();

        assert_eq!(outcome, MoveOutcome::Unchanged);
        assert_eq!(board, before);
        assert_eq!(ids(&board, CategoryId::Giving), vec![first, second]);
    }

    #[test]
    fn move_from_wrong_origin_is_rejected() {
        let mut board = Board::new();
        let id = add(
            &mut board,
            "A",
            1.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Giving,
        );
        let before = board.clone();

        let result = board.move_transaction(id, CategoryId::Future, CategoryId::Lifestyle);

        assert_eq!(result, Err(Error::NotInCategory(id, CategoryId::Future)));
        assert_eq!(board, before);
    }

    #[test]
    fn move_missing_transaction_is_rejected() {
        let mut board = Board::new();

        let result = board.move_transaction(99, CategoryId::Future, CategoryId::Lifestyle);

        assert_eq!(result, Err(Error::MoveMissingTransaction));
    }

    #[test]
    fn delete_removes_from_category_and_pins() {
        let mut board = Board::new();
        let id = add(
            &mut board,
            "A",
            1.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Giving,
        );
        board.toggle_pin(id).unwrap();

        let deleted = board.delete(id);

        assert_eq!(deleted.map(|transaction| transaction.id), Some(id));
        assert!(board.transactions(CategoryId::Giving).is_empty());
        assert!(!board.is_pinned(id));
        assert_eq!(board.pins().len(), 0);
    }

    #[test]
    fn delete_missing_transaction_is_a_no_op() {
        let mut board = Board::new();
        let id = add(
            &mut board,
            "A",
            1.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Giving,
        );
        board.delete(id);
        let before = board.clone();

        assert_eq!(board.delete(id), None);
        assert_eq!(board, before);
    }

    #[test]
    fn toggle_pin_flips_membership() {
        let mut board = Board::new();
        let id = add(
            &mut board,
            "A",
            1.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Giving,
        );

        assert_eq!(board.toggle_pin(id), Ok(true));
        assert!(board.is_pinned(id));
        assert_eq!(board.toggle_pin(id), Ok(false));
        assert!(!board.is_pinned(id));
    }

    #[test]
    fn toggle_pin_rejects_unknown_transaction() {
        let mut board = Board::new();

        assert_eq!(board.toggle_pin(3), Err(Error::PinMissingTransaction));
    }

    #[test]
    fn pinned_transactions_follow_pin_order() {
        let mut board = Board::new();
        let first = add(
            &mut board,
            "A",
            1.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Giving,
        );
        let second = add(
            &mut board,
            "B",
            1.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Future,
        );
        board.toggle_pin(second).unwrap();
        board.toggle_pin(first).unwrap();

        let pinned: Vec<_> = board
            .pinned_transactions()
            .into_iter()
            .map(|transaction| transaction.id)
            .collect();

        assert_eq!(pinned, vec![second, first]);
    }

    #[test]
    fn from_parts_keeps_order_and_drops_unknown_pins() {
        let created_at = datetime!(2025-05-01 12:00 UTC);
        let transactions = [3, 1, 2].map(|id| {
            Transaction::build(
                "x",
                1.0,
                Cadence::Monthly,
                Flow::Expense,
                CategoryId::Essentials,
            )
            .finalize(id, created_at)
            .unwrap()
        });

        let board = Board::from_parts(transactions, [2, 8], 0);

        assert_eq!(ids(&board, CategoryId::Essentials), vec![3, 1, 2]);
        assert!(board.is_pinned(2));
        assert!(!board.is_pinned(8));
        assert_eq!(board.next_id(), 4);
    }

    #[test]
    fn from_parts_continues_after_deleted_ids() {
        let transaction = Transaction::build(
            "x",
            1.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Essentials,
        )
        .finalize(2, datetime!(2025-05-01 12:00 UTC))
        .unwrap();

        let no_pins: [TransactionId; 0] = [];

        let board = Board::from_parts([transaction], no_pins, 7);

        assert_eq!(board.next_id(), 8);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut board = Board::new();
        add(
            &mut board,
            "Rent",
            400.0,
            Cadence::Weekly,
            Flow::Expense,
            CategoryId::Obligations,
        );
        let gym = add(
            &mut board,
            "Gym",
            60.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Lifestyle,
        );
        board.delete(gym);

        let coffee = add(
            &mut board,
            "Coffee",
            5.0,
            Cadence::Weekly,
            Flow::Expense,
            CategoryId::Lifestyle,
        );

        assert_ne!(coffee, gym);
        assert_eq!(board.delete(gym), None);
        assert!(board.find(coffee).is_some());
    }
}
