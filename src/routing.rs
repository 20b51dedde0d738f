//! Application router configuration.

use axum::{Router, middleware, response::Redirect, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_expense_endpoint,
        get_total_spent_endpoint, list_expenses_endpoint,
    },
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(endpoints::TOTAL_SPENT, get(get_total_spent_endpoint))
        .route(
            endpoints::EXPENSE,
            get(get_expense_endpoint).delete(delete_expense_endpoint),
        )
        .layer(middleware::from_fn(logging_middleware));

    let view_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page));

    api_routes
        .merge(view_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}



#[cfg(test)]
mod view_route_tests {
    use axum_test::TestServer;

    use crate::{
        AppState, build_router, endpoints,
        expense::{IdPolicy, InMemoryExpenseStore},
    };

    fn get_test_server() -> TestServer {
        let store = InMemoryExpenseStore::with_seed_data(IdPolicy::default());
        let app = build_router(AppState::new(store.into_shared()));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn dashboard_page_is_served() {
        let server = get_test_server();

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Total Spent"));
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found_page() {
        let server = get_test_server();

        server.get("/does/not/exist").await.assert_status_not_found();
    }
}
