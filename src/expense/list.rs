//! Endpoint for listing every expense.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::{Error, app_state::ExpenseState, expense::Expense};

/// The JSON body returned by [list_expenses_endpoint].
#[derive(Debug, Serialize)]
pub struct ExpenseList {
    pub expenses: Vec<Expense>,
}

/// Return all expenses in the order they were created.
pub async fn list_expenses_endpoint(
    State(state): State<ExpenseState>,
) -> Result<Json<ExpenseList>, Error> {
    let expenses = state.lock_store()?.list()?;

    Ok(Json(ExpenseList { expenses }))
}

#[cfg(test)]
mod list_expenses_endpoint_tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{
        expense::list_expenses_endpoint,
        test_utils::{assert_content_type, empty_state, parse_json_body, seeded_state},
    };

    #[tokio::test]
    async fn lists_seed_expenses_in_order() {
        let response = list_expenses_endpoint(State(seeded_state()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "application/json");
        assert_eq!(
            parse_json_body(response).await,
            json!({
                "expenses": [
                    { "id": 1, "title": "Coffee", "amount": 100.0 },
                    { "id": 2, "title": "Lunch", "amount": 200.0 },
                    { "id": 3, "title": "Dinner", "amount": 300.0 },
                ]
            })
        );
    }

    #[tokio::test]
    async fn lists_nothing_for_empty_store() {
        let response = list_expenses_endpoint(State(empty_state()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(parse_json_body(response).await, json!({ "expenses": [] }));
    }
}
