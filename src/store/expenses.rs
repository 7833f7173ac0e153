use crate::core::expense::{Expense, ExpenseError, validate_entry};
use crate::store::KeyValueStore;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

const EXPENSES_KEY: &str = "expenses";

/// Expense list persisted as a single JSON array.
pub struct ExpenseRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl ExpenseRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// All stored expenses, newest first.
    ///
    /// Entries that cannot be read as an expense (for example a malformed
    /// timestamp) are skipped with a warning. They stay in storage.
    pub async fn list(&self) -> Result<Vec<Expense>> {
        let (expenses, _) = self.load().await?;
        Ok(expenses)
    }

    /// Validates and stores a new expense. `created_at` defaults to now.
    pub async fn add(
        &self,
        amount: f64,
        description: &str,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Expense> {
        let _guard = self.write_lock.lock().await;
        let expense = Expense::new(amount, description, created_at.unwrap_or_else(Utc::now))?;

        let (mut expenses, unreadable) = self.load().await?;
        expenses.insert(0, expense.clone());
        self.save(&mut expenses, unreadable).await?;
        info!("Added expense {}", expense.id);
        Ok(expense)
    }

    /// Replaces amount and description; id and timestamp are kept.
    pub async fn update(&self, id: &str, amount: f64, description: &str) -> Result<Expense> {
        let _guard = self.write_lock.lock().await;
        let description = validate_entry(amount, description)?;

        let (mut expenses, unreadable) = self.load().await?;
        let expense = expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or_else(|| ExpenseError::NotFound(id.to_string()))?;
        expense.amount = amount;
        expense.description = description;
        let updated = expense.clone();

        self.save(&mut expenses, unreadable).await?;
        info!("Updated expense {id}");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<Expense> {
        let _guard = self.write_lock.lock().await;
        let (mut expenses, unreadable) = self.load().await?;
        let position = expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or_else(|| ExpenseError::NotFound(id.to_string()))?;
        let removed = expenses.remove(position);

        self.save(&mut expenses, unreadable).await?;
        info!("Deleted expense {id}");
        Ok(removed)
    }

    pub async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(EXPENSES_KEY).await?;
        info!("All expenses cleared");
        Ok(())
    }

    /// Decoded expenses sorted newest first, plus the raw entries that did
    /// not decode.
    async fn load(&self) -> Result<(Vec<Expense>, Vec<Value>)> {
        let Some(raw) = self.store.get(EXPENSES_KEY).await? else {
            debug!("No stored expenses");
            return Ok((Vec::new(), Vec::new()));
        };

        let entries: Vec<Value> =
            serde_json::from_str(&raw).context("Failed to parse stored expenses")?;
        let mut expenses = Vec::with_capacity(entries.len());
        let mut unreadable = Vec::new();
        for entry in entries {
            match Expense::deserialize(&entry) {
                Ok(expense) => expenses.push(expense),
                Err(e) => {
                    warn!("Skipping unreadable expense entry: {e}");
                    unreadable.push(entry);
                }
            }
        }
        expenses.sort_by(Expense::newest_first);
        debug!(
            "Loaded {} expenses ({} unreadable)",
            expenses.len(),
            unreadable.len()
        );
        Ok((expenses, unreadable))
    }

    /// Writes `expenses` newest first, followed by the unreadable entries
    /// exactly as they were stored.
    async fn save(&self, expenses: &mut [Expense], unreadable: Vec<Value>) -> Result<()> {
        expenses.sort_by(Expense::newest_first);
        let mut entries = expenses
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()
            .context("Failed to serialize expenses")?;
        entries.extend(unreadable);
        let json = serde_json::to_string(&entries).context("Failed to serialize expenses")?;
        self.store.set(EXPENSES_KEY, &json).await
    }
}
