//! Headline cards for the monthly figures.
//!
//! Shown at the top of the board and the summary page.

use maud::{Markup, html};

use crate::{
    html::{CARD_STYLE, currency_rounded_with_tooltip},
    summary::MonthlySummary,
};

const AMOUNT_GREEN_STYLE: &str = "text-green-600 dark:text-green-400";
const AMOUNT_RED_STYLE: &str = "text-red-600 dark:text-red-400";

/// A grid of cards with income, commitments, savings, net flow and the top category.
pub(crate) fn headline_cards(summary: &MonthlySummary) -> Markup {
    let net_style = if summary.net >= 0.0 {
        AMOUNT_GREEN_STYLE
    } else {
        AMOUNT_RED_STYLE
    };

    html! {
        section
            id="headline-cards"
            class="w-full grid grid-cols-2 md:grid-cols-3 xl:grid-cols-5 gap-4 mb-6"
        {
            (amount_card("Monthly income", summary.monthly_income, AMOUNT_GREEN_STYLE))
            (amount_card("Monthly commitments", summary.monthly_commitments, AMOUNT_RED_STYLE))
            (amount_card("Monthly savings", summary.monthly_savings, ""))
            (amount_card("Net flow", summary.net, net_style))

            div class=(CARD_STYLE) data-card="top-category"
            {
                h4 class="text-sm text-gray-600 dark:text-gray-400" { "Top category" }

                @match summary.top_category {
                    Some(category) => {
                        div
                            class="text-2xl font-bold truncate"
                            style={"color: " (category.details().accent_color)}
                        {
                            (category.name())
                        }
                    }
                    None => div class="text-2xl font-bold text-gray-400" { "None yet" }
                }

                div class="text-sm text-gray-600 dark:text-gray-400"
                {
                    (summary.total_transactions)
                    @if summary.total_transactions == 1 { " transaction" } @else { " transactions" }
                }
            }
        }
    }
}

fn amount_card(title: &str, amount: f64, amount_style: &str) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            h4 class="text-sm text-gray-600 dark:text-gray-400" { (title) }
            div class={"text-2xl font-bold " (amount_style)}
            {
                (currency_rounded_with_tooltip(amount))
            }
        }
    }
}
