//! Expense deletion endpoint.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::{
    Error,
    app_state::ExpenseState,
    expense::{Expense, ExpenseIdPath},
};

/// The JSON body returned by [delete_expense_endpoint].
#[derive(Debug, Serialize)]
pub struct DeletedExpense {
    pub expense: Expense,
}

/// Remove the expense with the ID in the request path and return it.
pub async fn delete_expense_endpoint(
    ExpenseIdPath(expense_id): ExpenseIdPath,
    State(state): State<ExpenseState>,
) -> Result<Json<DeletedExpense>, Error> {
    let expense = state.lock_store()?.delete(expense_id)?;

    tracing::info!("Deleted expense {} \"{}\"", expense.id, expense.title);

    Ok(Json(DeletedExpense { expense }))
}

#[cfg(test)]
mod delete_expense_endpoint_tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{
        Error,
        expense::{ExpenseIdPath, ExpenseStore, delete_expense_endpoint},
        test_utils::{parse_json_body, seeded_state},
    };

    #[tokio::test]
    async fn delete_expense_succeeds() {
        let state = seeded_state();

        let response = delete_expense_endpoint(ExpenseIdPath(2), State(state.clone()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            parse_json_body(response).await,
            json!({ "expense": { "id": 2, "title": "Lunch", "amount": 200.0 } })
        );

        let store = state.lock_store().unwrap();
        assert_eq!(store.list().unwrap().len(), 2);
        assert_eq!(store.get(2), Err(Error::ExpenseNotFound));
    }

    #[tokio::test]
    async fn delete_missing_expense_returns_not_found() {
        let state = seeded_state();

        let response = delete_expense_endpoint(ExpenseIdPath(42), State(state.clone()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            parse_json_body(response).await,
            json!({ "error": "Expense not found" })
        );
        assert_eq!(state.lock_store().unwrap().list().unwrap().len(), 3);
    }
}
