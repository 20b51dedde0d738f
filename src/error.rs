//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

/// The message sent to clients when an expense ID does not match a record.
pub const EXPENSE_NOT_FOUND_MESSAGE: &str = "Expense not found";

/// A single violated constraint on a field of a create expense payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// The name of the offending field, e.g. "title".
    pub field: &'static str,
    /// A human readable description of the violated constraint.
    pub message: String,
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The expense title has fewer than the minimum number of characters.
    #[error("title must be at least {min} characters long, got {got}")]
    TitleTooShort {
        /// The minimum number of characters.
        min: usize,
        /// The number of characters in the rejected title.
        got: usize,
    },

    /// The expense title has more than the maximum number of characters.
    #[error("title must be at most {max} characters long, got {got}")]
    TitleTooLong {
        /// The maximum number of characters.
        max: usize,
        /// The number of characters in the rejected title.
        got: usize,
    },

    /// The expense amount was zero, negative or not a finite number.
    #[error("amount must be a positive number, got {0}")]
    NonPositiveAmount(f64),

    /// Adding the expense would push the total spent past the largest
    /// finite number, which cannot be represented in JSON.
    #[error("amount would make the total spent too large to represent")]
    TotalSpentOverflow,

    /// A create expense payload violated one or more field constraints.
    #[error("invalid expense: {0:?}")]
    InvalidExpense(Vec<FieldError>),

    /// The request body could not be parsed as the expected JSON.
    #[error("invalid request body: {0}")]
    InvalidRequestBody(String),

    /// The requested expense could not be found.
    ///
    /// The client should check that the ID is correct and that the expense
    /// has not already been deleted.
    #[error("the requested expense could not be found")]
    ExpenseNotFound,

    /// Could not acquire the lock on the expense store.
    ///
    /// This only happens if another thread panicked while holding the lock.
    #[error("could not acquire the expense store lock")]
    StoreLockError,
}

impl Error {
    /// The field a validation error refers to, or `None` if the error is not
    /// a field validation error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::TitleTooShort { .. } | Error::TitleTooLong { .. } => Some("title"),
            Error::NonPositiveAmount(_) | Error::TotalSpentOverflow => Some("amount"),
            _ => None,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::ExpenseNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": EXPENSE_NOT_FOUND_MESSAGE })),
            )
                .into_response(),
            Error::InvalidExpense(issues) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid expense", "issues": issues })),
            )
                .into_response(),
            error @ (Error::TitleTooShort { .. }
            | Error::TitleTooLong { .. }
            | Error::NonPositiveAmount(_)
            | Error::TotalSpentOverflow) => {
                let issue = FieldError {
                    field: error.field().unwrap_or_default(),
                    message: error.to_string(),
                };

                Error::InvalidExpense(vec![issue]).into_response()
            }
            Error::InvalidRequestBody(description) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": description })),
            )
                .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
