//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/expenses/{expense_id}', use [format_endpoint].

use crate::expense::ExpenseId;

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The page showing the total amount spent.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to list and create expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route for the sum of all expense amounts.
pub const TOTAL_SPENT: &str = "/api/expenses/total-spent";
/// The route to fetch or delete a single expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/expenses/{expense_id}', '{expense_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: ExpenseId) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
