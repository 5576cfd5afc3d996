//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    board_page::get_board_page,
    csv_export::{get_categories_transactions_csv, get_monthly_summary_csv},
    endpoints,
    identity::{get_sign_in_page, get_sign_out, post_credential},
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    pinned_page::get_pinned_page,
    summary::{get_summary_json, get_summary_page},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, drop_transaction_endpoint,
        list_transactions_endpoint, toggle_pin_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// No route requires signing in.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::BOARD_VIEW, get(get_board_page))
        .route(endpoints::SUMMARY_VIEW, get(get_summary_page))
        .route(endpoints::PINNED_VIEW, get(get_pinned_page))
        .route(endpoints::SIGN_IN_VIEW, get(get_sign_in_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .route(endpoints::DROP_TRANSACTION, put(drop_transaction_endpoint))
        .route(endpoints::PIN_TRANSACTION, post(toggle_pin_endpoint))
        .route(endpoints::SUMMARY_API, get(get_summary_json))
        .route(endpoints::CREDENTIAL_API, post(post_credential))
        .route(endpoints::SIGN_OUT, get(get_sign_out))
        .route(endpoints::MONTHLY_SUMMARY_CSV, get(get_monthly_summary_csv))
        .route(
            endpoints::CATEGORIES_TRANSACTIONS_CSV,
            get(get_categories_transactions_csv),
        );

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the board.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::BOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_board() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::BOARD_VIEW);
    }
}
