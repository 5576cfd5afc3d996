//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}', use [format_endpoint].

/// The root route which redirects to the board.
pub const ROOT: &str = "/";
/// The page with the categories and their transactions.
pub const BOARD_VIEW: &str = "/board";
/// The page with the monthly and yearly figures.
pub const SUMMARY_VIEW: &str = "/summary";
/// The page listing pinned transactions.
pub const PINNED_VIEW: &str = "/pinned";
/// The page with the Google sign-in widget.
pub const SIGN_IN_VIEW: &str = "/sign_in";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create and list transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route to finish dragging a transaction onto a category or the trash.
pub const DROP_TRANSACTION: &str = "/api/transactions/{transaction_id}/drop";
/// The route to pin or unpin a transaction.
pub const PIN_TRANSACTION: &str = "/api/transactions/{transaction_id}/pin";
/// The route for the monthly summary as JSON.
pub const SUMMARY_API: &str = "/api/summary";
/// The route that receives the Google Identity credential.
pub const CREDENTIAL_API: &str = "/api/identity/credential";
/// The route for the client to sign out.
pub const SIGN_OUT: &str = "/api/identity/sign_out";
/// The monthly summary CSV download.
pub const MONTHLY_SUMMARY_CSV: &str = "/export/monthly-summary.csv";
/// The CSV download of every transaction by category.
pub const CATEGORIES_TRANSACTIONS_CSV: &str = "/export/categories-transactions.csv";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
