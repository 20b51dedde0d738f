//! Endpoint for the total amount spent across all expenses.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::{Error, app_state::ExpenseState};

/// The JSON body returned by [get_total_spent_endpoint].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalSpent {
    pub total_spent: f64,
}

/// Return the sum of the amounts of every expense.
pub async fn get_total_spent_endpoint(
    State(state): State<ExpenseState>,
) -> Result<Json<TotalSpent>, Error> {
    let total_spent = state.lock_store()?.total_spent()?;

    Ok(Json(TotalSpent { total_spent }))
}

#[cfg(test)]
mod total_spent_endpoint_tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{
        expense::get_total_spent_endpoint,
        test_utils::{empty_state, parse_json_body, seeded_state},
    };

    #[tokio::test]
    async fn sums_seed_expenses() {
        let response = get_total_spent_endpoint(State(seeded_state()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            parse_json_body(response).await,
            json!({ "totalSpent": 600.0 })
        );
    }

    #[tokio::test]
    async fn empty_store_spends_nothing() {
        let response = get_total_spent_endpoint(State(empty_state()))
            .await
            .into_response();

        assert_eq!(parse_json_body(response).await, json!({ "totalSpent": 0.0 }));
    }
}
