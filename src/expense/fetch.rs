//! Endpoint for fetching a single expense and the extractor for expense IDs
//! in the request path.

use axum::{
    Json,
    extract::{FromRequestParts, Path, State},
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::ExpenseState,
    expense::{Expense, ExpenseId},
    not_found::get_404_not_found_response,
};

/// An expense ID taken from a path segment made up only of ASCII digits.
///
/// Any other segment, e.g. `/api/expenses/abc`, is treated as a path that
/// does not exist and gets the generic 404 page. A digit string too large
/// for an [ExpenseId] cannot match any expense and gets the JSON "Expense not
/// found" error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseIdPath(pub ExpenseId);

impl<S> FromRequestParts<S> for ExpenseIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        parse_expense_id(&segment).map(ExpenseIdPath)
    }
}

fn parse_expense_id(segment: &str) -> Result<ExpenseId, Response> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(get_404_not_found_response());
    }

    segment
        .parse()
        .map_err(|_| Error::ExpenseNotFound.into_response())
}

/// Return the expense with the ID in the request path.
pub async fn get_expense_endpoint(
    ExpenseIdPath(expense_id): ExpenseIdPath,
    State(state): State<ExpenseState>,
) -> Result<Json<Expense>, Error> {
    let expense = state.lock_store()?.get(expense_id)?;

    Ok(Json(expense))
}

#[cfg(test)]
mod parse_expense_id_tests {
    use axum::http::StatusCode;

    use super::parse_expense_id;

    #[test]
    fn parses_digits() {
        assert_eq!(parse_expense_id("1").ok(), Some(1));
        assert_eq!(parse_expense_id("007").ok(), Some(7));
        assert_eq!(parse_expense_id("0").ok(), Some(0));
    }

    #[test]
    fn non_digit_segments_are_not_found_pages() {
        for segment in ["", "abc", "-1", "1.5", "+3", " 2"] {
            let response = parse_expense_id(segment).expect_err("segment should be rejected");

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn overflowing_digits_are_not_found() {
        let response =
            parse_expense_id("99999999999999999999999").expect_err("segment should be rejected");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
