//! Expense records and the JSON endpoints for managing them.

mod create;
mod delete;
mod domain;
mod fetch;
mod list;
mod store;
mod total_spent;

pub use create::create_expense_endpoint;
pub use delete::delete_expense_endpoint;
pub use domain::{
    CreateExpenseRequest, Expense, ExpenseAmount, ExpenseId, ExpenseTitle, NewExpense,
};
pub use fetch::{ExpenseIdPath, get_expense_endpoint};
pub use list::list_expenses_endpoint;
pub use store::{ExpenseStore, IdPolicy, InMemoryExpenseStore, SharedExpenseStore};
pub use total_spent::get_total_spent_endpoint;
