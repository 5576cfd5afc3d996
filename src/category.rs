//! The fixed set of budget categories.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Identifies one of the six budget buckets.
///
/// The set is closed: categories are seeded at startup and cannot be created
/// or removed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    Earnings,
    Obligations,
    Essentials,
    Lifestyle,
    Future,
    Giving,
}

impl CategoryId {
    /// All categories in display order. Aggregates iterate in this order.
    pub const ALL: [CategoryId; 6] = [
        CategoryId::Earnings,
        CategoryId::Obligations,
        CategoryId::Essentials,
        CategoryId::Lifestyle,
        CategoryId::Future,
        CategoryId::Giving,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Earnings => "earnings",
            CategoryId::Obligations => "obligations",
            CategoryId::Essentials => "essentials",
            CategoryId::Lifestyle => "lifestyle",
            CategoryId::Future => "future",
            CategoryId::Giving => "giving",
        }
    }

    /// The static display details for this category.
    pub fn details(self) -> &'static CategoryDetails {
        &CATEGORY_DETAILS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.details().name
    }
}

impl FromStr for CategoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::InvalidCategory(s.to_owned()))
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Name, colour and blurb shown for a category.
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryDetails {
    pub id: CategoryId,
    pub name: &'static str,
    /// A CSS colour used to accent the category column.
    pub accent_color: &'static str,
    pub description: &'static str,
}

// Indexed by `CategoryId as usize`, keep in declaration order.
static CATEGORY_DETAILS: [CategoryDetails; 6] = [
    CategoryDetails {
        id: CategoryId::Earnings,
        name: "Earnings",
        accent_color: "#16a34a",
        description: "Salary, side income and other money coming in",
    },
    CategoryDetails {
        id: CategoryId::Obligations,
        name: "Obligations",
        accent_color: "#dc2626",
        description: "Rent, loans, insurance and other fixed bills",
    },
    CategoryDetails {
        id: CategoryId::Essentials,
        name: "Essentials",
        accent_color: "#ea580c",
        description: "Groceries, transport, utilities",
    },
    CategoryDetails {
        id: CategoryId::Lifestyle,
        name: "Lifestyle",
        accent_color: "#9333ea",
        description: "Dining out, hobbies, subscriptions",
    },
    CategoryDetails {
        id: CategoryId::Future,
        name: "Future",
        accent_color: "#2563eb",
        description: "Savings, investments, emergency fund",
    },
    CategoryDetails {
        id: CategoryId::Giving,
        name: "Giving",
        accent_color: "#db2777",
        description: "Gifts and donations",
    },
];

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::{Error, category::CategoryId};

    #[test]
    fn details_match_their_id() {
        for id in CategoryId::ALL {
            assert_eq!(id.details().id, id);
        }
    }

    #[test]
    fn parses_identifier() {
        for id in CategoryId::ALL {
            assert_eq!(CategoryId::from_str(id.as_str()), Ok(id));
        }
    }

    #[test]
    fn rejects_unknown_identifier() {
        assert_eq!(
            CategoryId::from_str("groceries"),
            Err(Error::InvalidCategory("groceries".to_owned()))
        );
    }
}
