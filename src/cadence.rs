//! Recurrence cadences, flow directions, and the monthly-equivalent normalizer.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// How often a transaction recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Annual,
    /// A single payment. Spread over a year like [Cadence::Annual].
    OneTime,
}

impl Cadence {
    /// All cadences in the order they are offered to the user.
    pub const ALL: [Cadence; 6] = [
        Cadence::Weekly,
        Cadence::BiWeekly,
        Cadence::Monthly,
        Cadence::Quarterly,
        Cadence::Annual,
        Cadence::OneTime,
    ];

    /// The factor that converts an amount at this cadence into its monthly equivalent.
    ///
    /// Weeks are counted as four per month and fortnights as two per month,
    /// so the figures are intentionally approximate.
    pub fn monthly_factor(self) -> f64 {
        match self {
            Cadence::Weekly => 4.0,
            Cadence::BiWeekly => 2.0,
            Cadence::Monthly => 1.0,
            Cadence::Quarterly => 1.0 / 3.0,
            Cadence::Annual => 1.0 / 12.0,
            Cadence::OneTime => 1.0 / 12.0,
        }
    }

    /// The identifier used in forms, the database and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Cadence::Weekly => "weekly",
            Cadence::BiWeekly => "bi_weekly",
            Cadence::Monthly => "monthly",
            Cadence::Quarterly => "quarterly",
            Cadence::Annual => "annual",
            Cadence::OneTime => "one_time",
        }
    }

    /// The human readable name.
    pub fn label(self) -> &'static str {
        match self {
            Cadence::Weekly => "Weekly",
            Cadence::BiWeekly => "Bi-weekly",
            Cadence::Monthly => "Monthly",
            Cadence::Quarterly => "Quarterly",
            Cadence::Annual => "Annual",
            Cadence::OneTime => "One-time",
        }
    }
}

impl FromStr for Cadence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cadence::ALL
            .into_iter()
            .find(|cadence| cadence.as_str() == s)
            .ok_or_else(|| Error::InvalidCadence(s.to_owned()))
    }
}

impl Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Convert `amount` paid at `cadence` into the amount paid per month.
#[inline]
pub fn normalize(amount: f64, cadence: Cadence) -> f64 {
    amount * cadence.monthly_factor()
}

/// The direction money moves in a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    Income,
    Expense,
    Savings,
}

impl Flow {
    pub const ALL: [Flow; 3] = [Flow::Income, Flow::Expense, Flow::Savings];

    /// The sign applied to a normalized amount when summing a category total.
    ///
    /// Income offsets a category's monthly burden, so it counts as negative.
    pub fn category_sign(self) -> f64 {
        match self {
            Flow::Income => -1.0,
            Flow::Expense | Flow::Savings => 1.0,
        }
    }

    /// Whether money with this flow counts towards monthly commitments.
    pub fn is_commitment(self) -> bool {
        matches!(self, Flow::Expense | Flow::Savings)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flow::Income => "income",
            Flow::Expense => "expense",
            Flow::Savings => "savings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Flow::Income => "Income",
            Flow::Expense => "Expense",
            Flow::Savings => "Savings",
        }
    }
}

impl FromStr for Flow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flow::ALL
            .into_iter()
            .find(|flow| flow.as_str() == s)
            .ok_or_else(|| Error::InvalidFlow(s.to_owned()))
    }
}

impl Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
