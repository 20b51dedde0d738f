use crate::{
    app_state::ExpenseState,
    expense::{IdPolicy, InMemoryExpenseStore},
};

/// A fresh state holding the three seed expenses.
pub(crate) fn seeded_state() -> ExpenseState {
    ExpenseState {
        expense_store: InMemoryExpenseStore::with_seed_data(IdPolicy::default()).into_shared(),
    }
}

/// A fresh state with no expenses.
pub(crate) fn empty_state() -> ExpenseState {
    ExpenseState {
        expense_store: InMemoryExpenseStore::new(IdPolicy::default()).into_shared(),
    }
}
