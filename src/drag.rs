//! The drag-and-drop reassignment state machine.
//!
//! The browser reports drag events, and the server replays them through
//! [DragState] to decide what a drop means. Dropping turns into a
//! [DragAction] which is then applied to the [Board](crate::board::Board).

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    board::{Board, MoveOutcome},
    category::CategoryId,
    transaction::TransactionId,
};

/// Where a dragged transaction can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DropTarget {
    Category(CategoryId),
    /// Deletes the transaction.
    Trash,
}

const TRASH: &str = "trash";

impl FromStr for DropTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == TRASH {
            Ok(DropTarget::Trash)
        } else {
            s.parse().map(DropTarget::Category)
        }
    }
}

impl TryFrom<String> for DropTarget {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DropTarget> for String {
    fn from(value: DropTarget) -> Self {
        value.to_string()
    }
}

impl Display for DropTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropTarget::Category(category) => write!(f, "{}", category.as_str()),
            DropTarget::Trash => write!(f, "{TRASH}"),
        }
    }
}

/// What the board should do after a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    Move {
        transaction_id: TransactionId,
        from: CategoryId,
        to: CategoryId,
    },
    Delete {
        transaction_id: TransactionId,
    },
}

impl DragAction {
    pub fn transaction_id(self) -> TransactionId {
        match self {
            DragAction::Move { transaction_id, .. } | DragAction::Delete { transaction_id } => {
                transaction_id
            }
        }
    }

    /// Apply the action to `board`.
    ///
    /// # Errors
    /// Returns the error from [Board::move_transaction] for moves. Deletes
    /// never fail, deleting a missing transaction does nothing.
    pub fn apply(self, board: &mut Board) -> Result<(), Error> {
        match self {
            DragAction::Move {
                transaction_id,
                from,
                to,
            } => match board.move_transaction(transaction_id, from, to)? {
                MoveOutcome::Moved => {}
                MoveOutcome::Unchanged => {
                    tracing::debug!("transaction {transaction_id} dropped on its own category")
                }
            },
            DragAction::Delete { transaction_id } => {
                if board.delete(transaction_id).is_none() {
                    tracing::debug!("transaction {transaction_id} was already deleted");
                }
            }
        }

        Ok(())
    }
}

/// The state of a single drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        origin: CategoryId,
        transaction_id: TransactionId,
        /// The drop zone currently under the pointer, only used for highlighting.
        hover_target: Option<DropTarget>,
    },
}

impl DragState {
    /// Begin dragging `transaction_id` out of `origin`.
    ///
    /// Starting a new drag replaces any drag in progress.
    pub fn start(&mut self, origin: CategoryId, transaction_id: TransactionId) {
        *self = DragState::Dragging {
            origin,
            transaction_id,
            hover_target: None,
        };
    }

    /// Set or clear the highlighted drop zone. Does nothing while idle.
    pub fn hover(&mut self, target: Option<DropTarget>) {
        if let DragState::Dragging { hover_target, .. } = self {
            *hover_target = target;
        }
    }

    /// The drop zone to highlight, if any.
    pub fn hover_target(&self) -> Option<DropTarget> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { hover_target, .. } => *hover_target,
        }
    }

    /// Finish the drag on `target` and return to idle.
    ///
    /// Returns `None` when nothing should happen: there was no drag in progress,
    /// or the transaction was dropped back onto its origin.
    pub fn drop_on(&mut self, target: DropTarget) -> Option<DragAction> {
        let DragState::Dragging {
            origin,
            transaction_id,
            ..
        } = *self
        else {
            return None;
        };
        self.end();

        match target {
            DropTarget::Trash => Some(DragAction::Delete { transaction_id }),
            DropTarget::Category(to) if to == origin => None,
            DropTarget::Category(to) => Some(DragAction::Move {
                transaction_id,
                from: origin,
                to,
            }),
        }
    }

    /// Abandon the drag and return to idle.
    pub fn end(&mut self) {
        *self = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        board::{Board, test_support::add},
        cadence::{Cadence, Flow},
        category::CategoryId,
        drag::{DragAction, DragState, DropTarget},
    };

    #[test]
    fn drop_on_other_category_moves() {
        let mut state = DragState::default();
        state.start(CategoryId::Lifestyle, 4);

        let action = state.drop_on(DropTarget::Category(CategoryId::Future));

        assert_eq!(
            action,
            Some(DragAction::Move {
                transaction_id: 4,
                from: CategoryId::Lifestyle,
                to: CategoryId::Future
            })
        );
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn drop_on_origin_does_nothing() {
        let mut state = DragState::default();
        state.start(CategoryId::Lifestyle, 4);

        let action = state.drop_on(DropTarget::Category(CategoryId::Lifestyle));

        assert_eq!(action, None);
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn drop_on_trash_deletes() {
        let mut state = DragState::default();
        state.start(CategoryId::Giving, 2);

        let action = state.drop_on(DropTarget::Trash);

        assert_eq!(action, Some(DragAction::Delete { transaction_id: 2 }));
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn drop_while_idle_does_nothing() {
        let mut state = DragState::default();

        assert_eq!(state.drop_on(DropTarget::Trash), None);
    }

    #[test]
    fn hover_is_only_tracked_while_dragging() {
        let mut state = DragState::default();
        state.hover(Some(DropTarget::Trash));
        assert_eq!(state.hover_target(), None);

        state.start(CategoryId::Essentials, 1);
        state.hover(Some(DropTarget::Category(CategoryId::Giving)));
        assert_eq!(
            state.hover_target(),
            Some(DropTarget::Category(CategoryId::Giving))
        );

        state.hover(None);
        assert_eq!(state.hover_target(), None);

        state.end();
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn parses_drop_targets() {
        assert_eq!("trash".parse(), Ok(DropTarget::Trash));
        assert_eq!(
            "future".parse(),
            Ok(DropTarget::Category(CategoryId::Future))
        );
        assert!("bin".parse::<DropTarget>().is_err());
        assert_eq!(DropTarget::Trash.to_string(), "trash");
    }

    #[test]
    fn trash_action_removes_transaction_and_pin() {
        let mut board = Board::new();
        let id = add(
            &mut board,
            "Magazine",
            9.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Lifestyle,
        );
        board.toggle_pin(id).unwrap();

        DragAction::Delete { transaction_id: id }
            .apply(&mut board)
            .unwrap();

        assert!(board.find(id).is_none());
        assert!(!board.is_pinned(id));
    }

    #[test]
    fn move_action_reassigns_transaction() {
        let mut board = Board::new();
        let id = add(
            &mut board,
            "Magazine",
            9.0,
            Cadence::Monthly,
            Flow::Expense,
            CategoryId::Lifestyle,
        );

        DragAction::Move {
            transaction_id: id,
            from: CategoryId::Lifestyle,
            to: CategoryId::Giving,
        }
        .apply(&mut board)
        .unwrap();

        assert_eq!(board.transactions(CategoryId::Giving)[0].id, id);
        assert!(board.transactions(CategoryId::Lifestyle).is_empty());
    }
}
