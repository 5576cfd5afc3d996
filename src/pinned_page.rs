//! Lists the pinned transactions in the order they were pinned.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    app_state::BoardState,
    endpoints::{self, format_endpoint},
    html::{
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency, link,
    },
    navigation::NavBar,
    transaction::Transaction,
};

/// Display the pinned transactions.
pub async fn get_pinned_page(State(state): State<BoardState>) -> Result<Response, Error> {
    let board = state
        .board
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire board lock: {error}"))
        .map_err(|_| Error::BoardLockError)?;

    Ok(pinned_view(&board.pinned_transactions()).into_response())
}

fn pinned_view(pinned: &[&Transaction]) -> Markup {
    let nav_bar = NavBar::new(endpoints::PINNED_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class={(PAGE_CONTAINER_STYLE) " max-w-screen-lg"}
        {
            h2 class="w-full text-2xl font-bold mb-4" { "Pinned" }

            @if pinned.is_empty() {
                p
                {
                    "Nothing pinned yet. Pin transactions on the "
                    (link(endpoints::BOARD_VIEW, "board"))
                    " to keep an eye on them here."
                }
            } @else {
                div class="w-full relative overflow-x-auto shadow-md rounded"
                {
                    table id="pinned" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Label" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Monthly" }
                                th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Actions" } }
                            }
                        }

                        tbody hx-target-error="#alert-container"
                        {
                            @for transaction in pinned {
                                tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
                                {
                                    td class=(TABLE_CELL_STYLE) { (transaction.label) }
                                    td class=(TABLE_CELL_STYLE) { (transaction.category_id.name()) }
                                    td class=(TABLE_CELL_STYLE)
                                    {
                                        (format_currency(transaction.amount)) " " (transaction.cadence.label().to_lowercase())
                                    }
                                    td class=(TABLE_CELL_STYLE) { (format_currency(transaction.signed_monthly_amount())) }
                                    td class=(TABLE_CELL_STYLE)
                                    {
                                        // The response is the board, only the row removal matters here.
                                        button
                                            type="button"
                                            class="text-blue-600 dark:text-blue-400 underline"
                                            hx-post=(format_endpoint(endpoints::PIN_TRANSACTION, transaction.id))
                                            hx-target="closest tr"
                                            hx-swap="delete"
                                        {
                                            "Unpin"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Pinned", &[], &content)
}
