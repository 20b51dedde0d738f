//! Core expense domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::{Error, error::FieldError};

/// Identifier for an expense, assigned by the store.
pub type ExpenseId = u64;

/// A validated expense title between [ExpenseTitle::MIN_LENGTH] and
/// [ExpenseTitle::MAX_LENGTH] characters long.
///
/// Length is measured in user-perceived characters (grapheme clusters), so
/// "café" is four characters regardless of how it is encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ExpenseTitle(String);

impl ExpenseTitle {
    /// The minimum number of characters in a title.
    pub const MIN_LENGTH: usize = 3;
    /// The maximum number of characters in a title.
    pub const MAX_LENGTH: usize = 100;

    /// Create an expense title.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::TitleTooShort] or
    /// [Error::TitleTooLong] if `title` is outside the allowed length.
    pub fn new(title: &str) -> Result<Self, Error> {
        let length = title.graphemes(true).count();

        if length < Self::MIN_LENGTH {
            Err(Error::TitleTooShort {
                min: Self::MIN_LENGTH,
                got: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(Error::TitleTooLong {
                max: Self::MAX_LENGTH,
                got: length,
            })
        } else {
            Ok(Self(title.to_owned()))
        }
    }

    /// Create an expense title without validation.
    ///
    /// The caller should ensure the title is within the allowed length.
    pub fn new_unchecked(title: &str) -> Self {
        Self(title.to_owned())
    }
}

impl AsRef<str> for ExpenseTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ExpenseTitle {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ExpenseTitle::new(&value)
    }
}

impl From<ExpenseTitle> for String {
    fn from(value: ExpenseTitle) -> Self {
        value.0
    }
}

impl Display for ExpenseTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated, strictly positive and finite amount of money.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ExpenseAmount(f64);

impl ExpenseAmount {
    /// Create an expense amount.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::NonPositiveAmount] if `amount` is
    /// zero, negative, infinite or NaN.
    pub fn new(amount: f64) -> Result<Self, Error> {
        if amount.is_finite() && amount > 0.0 {
            Ok(Self(amount))
        } else {
            Err(Error::NonPositiveAmount(amount))
        }
    }

    /// Create an expense amount without validation.
    ///
    /// The caller should ensure that `amount` is positive and finite.
    pub fn new_unchecked(amount: f64) -> Self {
        Self(amount)
    }

    /// The amount as a plain number.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ExpenseAmount {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        ExpenseAmount::new(value)
    }
}

impl From<ExpenseAmount> for f64 {
    fn from(value: ExpenseAmount) -> Self {
        value.0
    }
}

/// A single spending event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The store assigned identifier.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub title: ExpenseTitle,
    /// How much was spent.
    pub amount: ExpenseAmount,
}

/// A validated expense that has not yet been assigned an ID.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// What the money was spent on.
    pub title: ExpenseTitle,
    /// How much was spent.
    pub amount: ExpenseAmount,
}

/// The JSON body of a create expense request.
///
/// Fields are kept unvalidated so that every violated constraint can be
/// reported at once by [CreateExpenseRequest::validate]. Any `id` sent by the
/// client is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    /// The unvalidated title.
    pub title: String,
    /// The unvalidated amount.
    pub amount: f64,
}

impl CreateExpenseRequest {
    /// Check every field constraint and build a [NewExpense].
    ///
    /// # Errors
    ///
    /// Returns an [Error::InvalidExpense] listing each violated constraint.
    pub fn validate(&self) -> Result<NewExpense, Error> {
        let title = ExpenseTitle::new(&self.title);
        let amount = ExpenseAmount::new(self.amount);

        match (title, amount) {
            (Ok(title), Ok(amount)) => Ok(NewExpense { title, amount }),
            (title, amount) => {
                let issues = [title.err(), amount.err()]
                    .into_iter()
                    .flatten()
                    .map(|error| FieldError {
                        field: error.field().unwrap_or_default(),
                        message: error.to_string(),
                    })
                    .collect();

                Err(Error::InvalidExpense(issues))
            }
        }
    }
}
