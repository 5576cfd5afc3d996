//! Table views for the summary page.

use maud::{Markup, html};

use crate::{
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
    summary::{MonthlySummary, YearlyProjection, projection::MONTHS_PER_YEAR},
};

const TABLE_STYLE: &str = "w-full text-sm text-left text-gray-500 dark:text-gray-400";
const NUMBER_CELL_STYLE: &str = "px-6 py-4 text-right whitespace-nowrap";

/// Monthly and yearly totals per category.
///
/// Totals are shown as magnitudes. A category whose income outweighs its
/// spending is marked as an offset.
pub(super) fn category_totals_table(summary: &MonthlySummary) -> Markup {
    html! {
        div class="overflow-x-auto rounded-lg shadow"
        {
            table id="category-totals" class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(NUMBER_CELL_STYLE) { "Transactions" }
                        th scope="col" class=(NUMBER_CELL_STYLE) { "Monthly" }
                        th scope="col" class=(NUMBER_CELL_STYLE) { "Yearly" }
                    }
                }

                tbody
                {
                    @for total in &summary.categories {
                        tr class=(TABLE_ROW_STYLE) data-category=(total.category.as_str())
                        {
                            th scope="row" class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"}
                            {
                                span
                                    class="inline-block w-2 h-2 rounded-full me-2"
                                    style={"background-color: " (total.category.details().accent_color)}
                                {}
                                (total.category.name())
                            }
                            td class=(NUMBER_CELL_STYLE) { (total.transaction_count) }
                            td class=(NUMBER_CELL_STYLE)
                            {
                                (format_currency(total.monthly_total.abs()))
                                @if total.monthly_total < 0.0 { " (offset)" }
                            }
                            td class=(NUMBER_CELL_STYLE)
                            {
                                (format_currency((total.monthly_total * MONTHS_PER_YEAR).abs()))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The share of monthly commitments for each category.
pub(super) fn allocation_table(summary: &MonthlySummary) -> Markup {
    let shares = summary.allocation_breakdown();

    html! {
        div class="overflow-x-auto rounded-lg shadow"
        {
            table id="allocation" class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(NUMBER_CELL_STYLE) { "Commitments" }
                        th scope="col" class=(NUMBER_CELL_STYLE) { "Share" }
                    }
                }

                tbody
                {
                    @for share in &shares {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            th scope="row" class=(TABLE_CELL_STYLE) { (share.category.name()) }
                            td class=(NUMBER_CELL_STYLE) { (format_currency(share.monthly_commitments)) }
                            td class=(NUMBER_CELL_STYLE)
                            {
                                div class="flex items-center justify-end gap-2"
                                {
                                    div class="w-24 bg-gray-200 dark:bg-gray-700 rounded-full h-2"
                                    {
                                        div
                                            class="h-2 rounded-full"
                                            style=(format!(
                                                "width: {:.1}%; background-color: {}",
                                                share.percentage.clamp(0.0, 100.0),
                                                share.category.details().accent_color
                                            ))
                                        {}
                                    }
                                    span { (format!("{:.1}%", share.percentage)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Monthly and yearly totals per flow, plus net flow.
pub(super) fn flow_table(summary: &MonthlySummary, yearly: &YearlyProjection) -> Markup {
    let flows = summary.flow_breakdown();

    html! {
        div class="overflow-x-auto rounded-lg shadow"
        {
            table id="flows" class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Flow" }
                        th scope="col" class=(NUMBER_CELL_STYLE) { "Monthly" }
                        th scope="col" class=(NUMBER_CELL_STYLE) { "Yearly" }
                    }
                }

                tbody
                {
                    @for flow in &flows {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            th scope="row" class=(TABLE_CELL_STYLE) { (flow.flow.label()) }
                            td class=(NUMBER_CELL_STYLE) { (format_currency(flow.monthly_total)) }
                            td class=(NUMBER_CELL_STYLE)
                            {
                                (format_currency(flow.monthly_total * MONTHS_PER_YEAR))
                            }
                        }
                    }

                    tr class={(TABLE_ROW_STYLE) " font-bold"}
                    {
                        th scope="row" class=(TABLE_CELL_STYLE) { "Net" }
                        td class=(NUMBER_CELL_STYLE) { (format_currency(summary.net)) }
                        td class=(NUMBER_CELL_STYLE) { (format_currency(yearly.net)) }
                    }
                }
            }
        }
    }
}
