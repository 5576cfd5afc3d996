//! The board: one column per category, with drag-and-drop between columns.
//!
//! Every change made on the board (drop, pin, delete) responds with
//! [board_partial] so the page swaps in the new board in one go.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    app_state::BoardState,
    board::Board,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, CARD_STYLE, PAGE_CONTAINER_STYLE, base,
        currency_rounded_with_tooltip, dollar_input_styles, format_currency,
    },
    navigation::NavBar,
    summary::headline_cards,
    timezone::local_now,
    transaction::{Transaction, new_transaction_form},
};

/// Display the board with the form for adding transactions.
pub async fn get_board_page(State(state): State<BoardState>) -> Result<Response, Error> {
    let today = local_now(&state.local_timezone)?.date();

    let board = state
        .board
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire board lock: {error}"))
        .map_err(|_| Error::BoardLockError)?;

    let nav_bar = NavBar::new(endpoints::BOARD_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class={(PAGE_CONTAINER_STYLE) " max-w-screen-2xl"}
        {
            div class="w-full grid grid-cols-1 xl:grid-cols-[20rem_1fr] gap-6"
            {
                aside class=(CARD_STYLE)
                {
                    h2 class="text-xl font-bold mb-4" { "New transaction" }
                    (new_transaction_form(today))
                }

                (board_partial(&board))
            }
        }
    };

    Ok(base("Board", &[dollar_input_styles()], &content).into_response())
}

/// The headline cards, category columns and trash zone.
///
/// The outer element has the id `board` so that board actions can target it
/// with `hx-swap="outerHTML"`.
pub(crate) fn board_partial(board: &Board) -> Markup {
    let summary = board.summary();

    html! {
        div id="board" class="w-full" hx-target-error="#alert-container"
        {
            (headline_cards(&summary))

            @if board.is_empty() {
                p class="mb-4 text-gray-600 dark:text-gray-400"
                {
                    "Nothing logged yet. Add a transaction, then drag it between categories."
                }
            }

            div class="grid grid-cols-1 md:grid-cols-2 2xl:grid-cols-3 gap-4"
            {
                @for (category, transactions) in board.categories() {
                    @let details = category.details();
                    @let monthly_total = summary
                        .category(category)
                        .map_or(0.0, |total| total.monthly_total);

                    section
                        class={(CARD_STYLE) " drop-zone min-h-40"}
                        style={"border-top: 4px solid " (details.accent_color)}
                        data-category=(details.id.as_str())
                        data-drop-target=(details.id.as_str())
                    {
                        header class="flex justify-between items-baseline mb-2"
                        {
                            h3 class="text-lg font-semibold" { (details.name) }
                            span class="text-sm" data-category-total
                            {
                                (currency_rounded_with_tooltip(monthly_total.abs())) " / mo"
                            }
                        }

                        p class="text-xs text-gray-500 dark:text-gray-400 mb-3" { (details.description) }

                        @if transactions.is_empty() {
                            p class="text-sm text-gray-400 italic" { "Drag transactions here" }
                        } @else {
                            ul class="space-y-2"
                            {
                                @for transaction in transactions {
                                    (transaction_item(transaction, board.is_pinned(transaction.id)))
                                }
                            }
                        }
                    }
                }
            }

            div
                id="trash"
                class="drop-zone mt-4 p-6 rounded-lg border-2 border-dashed border-red-300
                    dark:border-red-700 text-center text-red-600 dark:text-red-400"
                data-drop-target="trash"
            {
                "Drop here to delete"
            }
        }
    }
}

fn transaction_item(transaction: &Transaction, is_pinned: bool) -> Markup {
    let pin_url = format_endpoint(endpoints::PIN_TRANSACTION, transaction.id);
    let delete_url = format_endpoint(endpoints::TRANSACTION, transaction.id);

    html! {
        li
            draggable="true"
            class="p-3 rounded bg-gray-50 dark:bg-gray-700 cursor-grab"
            data-transaction-id=(transaction.id)
            data-category=(transaction.category_id.as_str())
        {
            div class="flex justify-between gap-2"
            {
                span class="font-medium truncate"
                {
                    @if is_pinned { span title="Pinned" { "📌 " } }
                    (transaction.label)
                }
                span { (format_currency(transaction.amount)) }
            }

            div class="flex justify-between text-xs text-gray-600 dark:text-gray-400"
            {
                span { (transaction.cadence.label()) " " (transaction.flow.label().to_lowercase()) }
                span { (format_currency(transaction.monthly_amount())) " / mo" }
            }

            @if !transaction.note.is_empty() {
                p class="text-xs mt-1 text-gray-500 dark:text-gray-400" { (transaction.note) }
            }

            div class="flex gap-4 mt-2 text-xs"
            {
                button
                    type="button"
                    class="text-blue-600 dark:text-blue-400 underline"
                    hx-post=(pin_url)
                    hx-target="#board"
                    hx-swap="outerHTML"
                {
                    @if is_pinned { "Unpin" } @else { "Pin" }
                }

                button
                    type="button"
                    class=(BUTTON_DELETE_STYLE)
                    hx-delete=(delete_url)
                    hx-confirm={"Delete \"" (transaction.label) "\"?"}
                    hx-target="#board"
                    hx-swap="outerHTML"
                {
                    "Delete"
                }
            }
        }
    }
}
