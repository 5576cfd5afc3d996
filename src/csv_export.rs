//! CSV downloads of the monthly summary and the board's transactions.

use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use time::Date;

use crate::{
    Error,
    app_state::BoardState,
    board::Board,
    summary::{MONTHS_PER_YEAR, MonthlySummary, YearlyProjection},
    timezone::local_now,
};

/// The file name for the transactions download.
pub const CATEGORIES_TRANSACTIONS_FILE_NAME: &str = "categories-transactions.csv";

/// Write a header row followed by `rows` as a CSV document.
///
/// Cells containing a comma, quote or newline are quoted with inner quotes
/// doubled. Every row, including the last, ends with `\n`.
///
/// # Errors
/// Returns [Error::CsvError] if the document could not be written.
pub fn to_csv<I, R>(headers: &[&str], rows: I) -> Result<String, Error>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(headers)?;

    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::CsvError(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::CsvError(error.to_string()))
}

/// `monthly-summary-<year>-<month>.csv` for the month containing `date`.
pub fn monthly_summary_file_name(date: Date) -> String {
    format!(
        "monthly-summary-{}-{:02}.csv",
        date.year(),
        u8::from(date.month())
    )
}

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// One row per category, then the overall monthly figures with their yearly values.
pub fn monthly_summary_csv(summary: &MonthlySummary) -> Result<String, Error> {
    let allocation = summary.allocation_breakdown();

    let category_rows = summary.categories.iter().map(|total| {
        let percentage = allocation
            .iter()
            .find(|share| share.category == total.category)
            .map_or(0.0, |share| share.percentage);

        vec![
            total.category.name().to_owned(),
            total.transaction_count.to_string(),
            money(total.monthly_total),
            money(total.monthly_total * MONTHS_PER_YEAR),
            format!("{percentage:.1}"),
        ]
    });

    let yearly = YearlyProjection::from(summary);
    let overall_rows = [
        ("Monthly income", summary.monthly_income, yearly.income),
        ("Monthly commitments", summary.monthly_commitments, yearly.commitments),
        ("Monthly savings", summary.monthly_savings, yearly.savings),
        ("Net", summary.net, yearly.net),
    ]
    .into_iter()
    .map(|(name, monthly, yearly)| {
        vec![
            name.to_owned(),
            String::new(),
            money(monthly),
            money(yearly),
            String::new(),
        ]
    });

    to_csv(
        &[
            "Category",
            "Transactions",
            "Monthly total",
            "Yearly total",
            "Allocation %",
        ],
        category_rows.chain(overall_rows),
    )
}

/// One row per transaction in board order.
pub fn categories_transactions_csv(board: &Board) -> Result<String, Error> {
    let rows = board.all_transactions().map(|transaction| {
        vec![
            transaction.category_id.name().to_owned(),
            transaction.label.clone(),
            transaction.flow.label().to_owned(),
            transaction.cadence.label().to_owned(),
            money(transaction.amount),
            money(transaction.monthly_amount()),
            transaction.note.clone(),
            transaction.date.to_string(),
            transaction.created_at.to_string(),
            board.is_pinned(transaction.id).to_string(),
        ]
    });

    to_csv(
        &[
            "Category",
            "Label",
            "Flow",
            "Cadence",
            "Amount",
            "Monthly equivalent",
            "Note",
            "Date",
            "Created at",
            "Pinned",
        ],
        rows,
    )
}

fn csv_download(file_name: &str, body: String) -> Response {
    (
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}

/// Download the monthly summary named after the current local month.
pub async fn get_monthly_summary_csv(State(state): State<BoardState>) -> Result<Response, Error> {
    let today = local_now(&state.local_timezone)?.date();

    let summary = state
        .board
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire board lock: {error}"))
        .map_err(|_| Error::BoardLockError)?
        .summary();

    let body = monthly_summary_csv(&summary)?;

    Ok(csv_download(&monthly_summary_file_name(today), body))
}

/// Download every transaction with its category.
pub async fn get_categories_transactions_csv(
    State(state): State<BoardState>,
) -> Result<Response, Error> {
    let board = state
        .board
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire board lock: {error}"))
        .map_err(|_| Error::BoardLockError)?;

    let body = categories_transactions_csv(&board)?;

    Ok(csv_download(CATEGORIES_TRANSACTIONS_FILE_NAME, body))
}
