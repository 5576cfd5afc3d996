//! Monthly aggregation of the board.
//!
//! Category totals use the "net monthly burden" sign convention: income
//! counts as negative and expenses and savings as positive. Callers take the
//! absolute value when they display a total.

use serde::Serialize;

use crate::{
    cadence::Flow,
    category::CategoryId,
    transaction::Transaction,
};

/// The monthly figures for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: CategoryId,
    pub transaction_count: usize,
    /// Signed monthly-equivalent total, income is negative.
    pub monthly_total: f64,
    /// Monthly-equivalent expenses and savings only.
    pub monthly_commitments: f64,
}

/// One category's share of the monthly commitments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationShare {
    pub category: CategoryId,
    pub monthly_commitments: f64,
    /// Between 0 and 100. Zero for every category when there are no commitments.
    pub percentage: f64,
}

/// The monthly-equivalent total for one flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowTotal {
    pub flow: Flow,
    pub monthly_total: f64,
}

/// Monthly-equivalent totals for the whole board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// One entry per category, in category order.
    pub categories: Vec<CategoryTotal>,
    pub monthly_income: f64,
    /// Expenses plus savings. Income never counts here.
    pub monthly_commitments: f64,
    pub monthly_savings: f64,
    /// Income minus commitments.
    pub net: f64,
    pub total_transactions: usize,
    /// The category with the highest signed monthly total, `None` for an empty board.
    pub top_category: Option<CategoryId>,
}

impl MonthlySummary {
    pub fn category(&self, category: CategoryId) -> Option<&CategoryTotal> {
        self.categories
            .iter()
            .find(|total| total.category == category)
    }

    /// Each category's percentage of the monthly commitments, in category order.
    pub fn allocation_breakdown(&self) -> Vec<AllocationShare> {
        self.categories
            .iter()
            .map(|total| AllocationShare {
                category: total.category,
                monthly_commitments: total.monthly_commitments,
                percentage: if self.monthly_commitments > 0.0 {
                    total.monthly_commitments / self.monthly_commitments * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// The monthly total for each flow, in flow order.
    pub fn flow_breakdown(&self) -> Vec<FlowTotal> {
        let expenses = self.monthly_commitments - self.monthly_savings;

        Flow::ALL
            .into_iter()
            .map(|flow| FlowTotal {
                flow,
                monthly_total: match flow {
                    Flow::Income => self.monthly_income,
                    Flow::Expense => expenses,
                    Flow::Savings => self.monthly_savings,
                },
            })
            .collect()
    }
}

/// Aggregate categories and their transactions into a [MonthlySummary].
///
/// Categories should be given in category order so that ties for the top
/// category go to the first one.
pub fn summarize<'a>(
    categories: impl IntoIterator<Item = (CategoryId, &'a [Transaction])>,
) -> MonthlySummary {
    let mut summary = MonthlySummary {
        categories: Vec::with_capacity(CategoryId::ALL.len()),
        monthly_income: 0.0,
        monthly_commitments: 0.0,
        monthly_savings: 0.0,
        net: 0.0,
        total_transactions: 0,
        top_category: None,
    };

    for (category, transactions) in categories {
        let mut total = CategoryTotal {
            category,
            transaction_count: transactions.len(),
            monthly_total: 0.0,
            monthly_commitments: 0.0,
        };

        for transaction in transactions {
            let monthly_amount = transaction.monthly_amount();
            total.monthly_total += transaction.signed_monthly_amount();

            match transaction.flow {
                Flow::Income => summary.monthly_income += monthly_amount,
                Flow::Expense => summary.monthly_commitments += monthly_amount,
                Flow::Savings => {
                    summary.monthly_commitments += monthly_amount;
                    summary.monthly_savings += monthly_amount;
                }
            }

            if transaction.flow.is_commitment() {
                total.monthly_commitments += monthly_amount;
            }
        }

        summary.total_transactions += total.transaction_count;
        summary.categories.push(total);
    }

    summary.net = summary.monthly_income - summary.monthly_commitments;

    if summary.total_transactions > 0 {
        summary.top_category = summary
            .categories
            .iter()
            .fold(None::<&CategoryTotal>, |top, total| match top {
                Some(top) if top.monthly_total >= total.monthly_total => Some(top),
                _ => Some(total),
            })
            .map(|total| total.category);
    }

    summary
}
