//! Summary page and JSON handlers.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Serialize;

use crate::{
    Error,
    app_state::BoardState,
    endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, CARD_STYLE, PAGE_CONTAINER_STYLE, base,
        currency_rounded_with_tooltip,
    },
    navigation::NavBar,
    summary::{
        AllocationShare, FlowTotal, MonthlySummary, YearlyProjection,
        cards::headline_cards,
        tables::{allocation_table, category_totals_table, flow_table},
    },
};

/// The JSON body of the summary endpoint.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub monthly: MonthlySummary,
    pub yearly: YearlyProjection,
    pub allocation: Vec<AllocationShare>,
    pub flows: Vec<FlowTotal>,
}

impl From<MonthlySummary> for SummaryResponse {
    fn from(monthly: MonthlySummary) -> Self {
        Self {
            yearly: YearlyProjection::from(&monthly),
            allocation: monthly.allocation_breakdown(),
            flows: monthly.flow_breakdown(),
            monthly,
        }
    }
}

/// Display the monthly and yearly figures for the board.
pub async fn get_summary_page(State(state): State<BoardState>) -> Result<Response, Error> {
    let summary = state
        .board
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire board lock: {error}"))
        .map_err(|_| Error::BoardLockError)?
        .summary();

    Ok(summary_view(&summary).into_response())
}

/// Return the monthly summary and yearly projection as JSON.
pub async fn get_summary_json(State(state): State<BoardState>) -> Result<Response, Error> {
    let summary = state
        .board
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire board lock: {error}"))
        .map_err(|_| Error::BoardLockError)?
        .summary();

    Ok(Json(SummaryResponse::from(summary)).into_response())
}

fn summary_view(summary: &MonthlySummary) -> Markup {
    let nav_bar = NavBar::new(endpoints::SUMMARY_VIEW).into_html();
    let yearly = YearlyProjection::from(summary);

    let content = html! {
        (nav_bar)

        div class={(PAGE_CONTAINER_STYLE) " max-w-screen-xl"}
        {
            div class="w-full flex justify-between items-baseline mb-4"
            {
                h2 class="text-2xl font-bold" { "Summary" }

                div class="flex gap-2"
                {
                    a href=(endpoints::MONTHLY_SUMMARY_CSV) class=(BUTTON_SECONDARY_STYLE) download
                    {
                        "Export summary"
                    }
                    a href=(endpoints::CATEGORIES_TRANSACTIONS_CSV) class=(BUTTON_SECONDARY_STYLE) download
                    {
                        "Export transactions"
                    }
                }
            }

            (headline_cards(summary))

            section class="w-full mb-6"
            {
                h3 class="text-xl font-semibold mb-4" { "Yearly projection" }

                div id="yearly-projection" class="grid grid-cols-2 md:grid-cols-4 gap-4"
                {
                    @for (title, amount) in [
                        ("Income", yearly.income),
                        ("Commitments", yearly.commitments),
                        ("Savings", yearly.savings),
                        ("Net", yearly.net),
                    ] {
                        div class=(CARD_STYLE)
                        {
                            h4 class="text-sm text-gray-600 dark:text-gray-400" { (title) }
                            div class="text-2xl font-bold" { (currency_rounded_with_tooltip(amount)) }
                        }
                    }
                }

                p class="text-sm text-gray-600 dark:text-gray-400 mt-2"
                {
                    "Twelve times the monthly figures. One-time transactions are spread over the year."
                }
            }

            section class="w-full grid grid-cols-1 xl:grid-cols-2 gap-6"
            {
                div
                {
                    h3 class="text-xl font-semibold mb-4" { "By category" }
                    (category_totals_table(summary))
                }

                div
                {
                    h3 class="text-xl font-semibold mb-4" { "Allocation" }
                    (allocation_table(summary))
                }

                div
                {
                    h3 class="text-xl font-semibold mb-4" { "By flow" }
                    (flow_table(summary, &yearly))
                }
            }
        }
    };

    base("Summary", &[], &content)
}
