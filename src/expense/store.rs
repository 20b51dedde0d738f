//! The expense store trait and its in-memory implementation.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    expense::{Expense, ExpenseAmount, ExpenseId, ExpenseTitle, NewExpense},
};

/// Handles the creation, retrieval and deletion of expenses.
///
/// Request handlers only talk to this trait, so a persistent implementation
/// can replace [InMemoryExpenseStore] without touching the routes.
pub trait ExpenseStore {
    /// All expenses in insertion order.
    fn list(&self) -> Result<Vec<Expense>, Error>;

    /// Assign an ID to `new_expense`, append it to the store and return the
    /// stored expense.
    ///
    /// # Errors
    ///
    /// Returns [Error::TotalSpentOverflow] if the new total spent would not be
    /// a finite number.
    fn create(&mut self, new_expense: NewExpense) -> Result<Expense, Error>;

    /// Retrieve the first expense with the ID `id`.
    ///
    /// # Errors
    ///
    /// Returns [Error::ExpenseNotFound] if no expense has the ID `id`.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Remove the first expense with the ID `id` and return it.
    ///
    /// # Errors
    ///
    /// Returns [Error::ExpenseNotFound] if no expense has the ID `id`.
    fn delete(&mut self, id: ExpenseId) -> Result<Expense, Error>;

    /// The sum of the amounts of all expenses, zero if there are none.
    fn total_spent(&self) -> Result<f64, Error>;
}

/// An expense store shared between request handlers.
pub type SharedExpenseStore = Arc<Mutex<dyn ExpenseStore + Send>>;

/// How the store picks the ID of a newly created expense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum IdPolicy {
    /// One more than the number of expenses in the store.
    ///
    /// IDs can repeat after a deletion, e.g. deleting the last of three
    /// expenses and then creating one assigns ID 3 a second time.
    #[default]
    CollectionLength,
    /// One more than the largest ID the store has ever held, so IDs are
    /// never reused.
    Monotonic,
}

/// An [ExpenseStore] that keeps expenses in a vector for the lifetime of the
/// process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExpenseStore {
    expenses: Vec<Expense>,
    id_policy: IdPolicy,
    highest_id: ExpenseId,
}

impl InMemoryExpenseStore {
    /// Create an empty store.
    pub fn new(id_policy: IdPolicy) -> Self {
        Self {
            expenses: Vec::new(),
            id_policy,
            highest_id: 0,
        }
    }

    /// Create a store holding the three seed expenses: "Coffee" (100),
    /// "Lunch" (200) and "Dinner" (300) with IDs 1 to 3.
    pub fn with_seed_data(id_policy: IdPolicy) -> Self {
        let expenses = [("Coffee", 100.0), ("Lunch", 200.0), ("Dinner", 300.0)]
            .into_iter()
            .zip(1..)
            .map(|((title, amount), id)| Expense {
                id,
                title: ExpenseTitle::new_unchecked(title),
                amount: ExpenseAmount::new_unchecked(amount),
            })
            .collect();

        Self::from_expenses(expenses, id_policy)
    }

    /// Create a store holding `expenses` in the given order.
    pub fn from_expenses(expenses: Vec<Expense>, id_policy: IdPolicy) -> Self {
        let highest_id = expenses.iter().map(|e| e.id).max().unwrap_or(0);

        Self {
            expenses,
            id_policy,
            highest_id,
        }
    }

    /// Wrap the store so it can be shared between request handlers.
    pub fn into_shared(self) -> SharedExpenseStore {
        Arc::new(Mutex::new(self))
    }

    fn next_id(&self) -> ExpenseId {
        match self.id_policy {
            IdPolicy::CollectionLength => self.expenses.len() as ExpenseId + 1,
            IdPolicy::Monotonic => self.highest_id + 1,
        }
    }

    fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|expense| expense.id == id)
    }
}

impl ExpenseStore for InMemoryExpenseStore {
    fn list(&self) -> Result<Vec<Expense>, Error> {
        Ok(self.expenses.clone())
    }

    fn create(&mut self, new_expense: NewExpense) -> Result<Expense, Error> {
        if !(self.total_spent()? + new_expense.amount.value()).is_finite() {
            tracing::warn!(
                "rejected expense \"{}\": total spent would overflow",
                new_expense.title
            );
            return Err(Error::TotalSpentOverflow);
        }

        let expense = Expense {
            id: self.next_id(),
            title: new_expense.title,
            amount: new_expense.amount,
        };

        self.highest_id = self.highest_id.max(expense.id);
        self.expenses.push(expense.clone());

        Ok(expense)
    }

    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        self.position(id)
            .map(|index| self.expenses[index].clone())
            .ok_or(Error::ExpenseNotFound)
    }

    fn delete(&mut self, id: ExpenseId) -> Result<Expense, Error> {
        self.position(id)
            .map(|index| self.expenses.remove(index))
            .ok_or(Error::ExpenseNotFound)
    }

    fn total_spent(&self) -> Result<f64, Error> {
        Ok(self
            .expenses
            .iter()
            .fold(0.0, |total, expense| total + expense.amount.value()))
    }
}
