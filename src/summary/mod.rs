//! Monthly aggregation, yearly projection and the summary page.

mod aggregation;
mod cards;
mod handlers;
mod projection;
mod tables;

pub use aggregation::{AllocationShare, CategoryTotal, FlowTotal, MonthlySummary, summarize};
pub(crate) use cards::headline_cards;
pub use handlers::{SummaryResponse, get_summary_json, get_summary_page};
pub use projection::{MONTHS_PER_YEAR, YearlyProjection};
