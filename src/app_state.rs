//! Implements a struct that holds the state of the REST server.

use std::sync::MutexGuard;

use axum::extract::FromRef;

use crate::{
    Error,
    expense::{ExpenseStore, SharedExpenseStore},
};

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState {
    /// The store holding every expense.
    pub expense_store: SharedExpenseStore,
}

impl AppState {
    /// Create a new [AppState] that serves the expenses in `expense_store`.
    pub fn new(expense_store: SharedExpenseStore) -> Self {
        Self { expense_store }
    }
}

/// The state needed by the expense endpoints.
#[derive(Clone)]
pub struct ExpenseState {
    /// The store holding every expense.
    pub expense_store: SharedExpenseStore,
}

impl ExpenseState {
    /// Lock the expense store for the duration of one operation.
    ///
    /// # Errors
    ///
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, dyn ExpenseStore + Send + 'static>, Error> {
        self.expense_store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }
}

impl FromRef<AppState> for ExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}
