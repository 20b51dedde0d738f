//! Expense creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    Error,
    app_state::ExpenseState,
    expense::{CreateExpenseRequest, Expense},
};

/// Validate the JSON payload, store it as a new expense and return the
/// stored expense with its assigned ID.
///
/// Responds with 400 Bad Request if the body is not valid JSON or breaks a
/// field constraint.
pub async fn create_expense_endpoint(
    State(state): State<ExpenseState>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), Error> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("rejected create expense body: {rejection}");
        Error::InvalidRequestBody(rejection.body_text())
    })?;

    let new_expense = request.validate()?;
    let expense = state.lock_store()?.create(new_expense)?;

    tracing::info!("Created expense {} \"{}\"", expense.id, expense.title);

    Ok((StatusCode::CREATED, Json(expense)))
}
