//! Flat yearly projection of the monthly figures.

use serde::Serialize;

use crate::summary::MonthlySummary;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// The monthly figures scaled up to a year.
///
/// There is no compounding or seasonality, every figure is twelve times its
/// monthly counterpart. One-time transactions are already spread over twelve
/// months, so they come back at their full amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyProjection {
    pub income: f64,
    pub commitments: f64,
    pub savings: f64,
    pub net: f64,
}

impl From<&MonthlySummary> for YearlyProjection {
    fn from(summary: &MonthlySummary) -> Self {
        Self {
            income: summary.monthly_income * MONTHS_PER_YEAR,
            commitments: summary.monthly_commitments * MONTHS_PER_YEAR,
            savings: summary.monthly_savings * MONTHS_PER_YEAR,
            net: summary.net * MONTHS_PER_YEAR,
        }
    }
}
