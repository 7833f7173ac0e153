//! Expense records and entry validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub description: String,
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Creates a validated record with a fresh id.
    pub fn new(
        amount: f64,
        description: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ExpenseError> {
        let description = validate_entry(amount, description)?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            amount,
            description,
            created_at,
        })
    }

    /// Most recent first; identical timestamps fall back to ascending id.
    pub fn newest_first(a: &Expense, b: &Expense) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseError {
    InvalidAmount(f64),
    EmptyDescription,
    NotFound(String),
}

impl Display for ExpenseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpenseError::InvalidAmount(amount) => {
                write!(f, "Invalid amount {amount}: must be a positive number")
            }
            ExpenseError::EmptyDescription => write!(f, "Description must not be empty"),
            ExpenseError::NotFound(id) => write!(f, "Expense not found: {id}"),
        }
    }
}

impl std::error::Error for ExpenseError {}

/// Checks an amount/description pair and returns the trimmed description.
pub fn validate_entry(amount: f64, description: &str) -> Result<String, ExpenseError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ExpenseError::InvalidAmount(amount));
    }
    let description = description.trim();
    if description.is_empty() {
        return Err(ExpenseError::EmptyDescription);
    }
    Ok(description.to_string())
}
