//! Expense Tracker is a small web app for recording expenses and seeing how
//! much has been spent.
//!
//! This library provides a JSON REST API over an in-memory list of expenses
//! and a dashboard page that displays the total amount spent.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod dashboard;
pub mod endpoints;
mod error;
mod expense;
mod html;
mod logging;
mod not_found;
mod routing;

#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, ExpenseState};
pub use dashboard::TotalSpentCard;
pub use error::{EXPENSE_NOT_FOUND_MESSAGE, Error, FieldError};
pub use expense::{
    CreateExpenseRequest, Expense, ExpenseAmount, ExpenseId, ExpenseStore, ExpenseTitle, IdPolicy,
    InMemoryExpenseStore, NewExpense, SharedExpenseStore,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
