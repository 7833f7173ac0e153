use super::ui;
use crate::context::AppContext;
use crate::core::Expense;
use crate::core::period::entry_timestamp;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use comfy_table::Cell;

fn describe(ctx: &AppContext, expense: &Expense) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Id"),
        ui::header_cell("Date"),
        ui::header_cell("Description"),
        ui::header_cell(&format!("Amount ({})", ctx.settings.currency_symbol)),
    ]);
    let local = expense.created_at.with_timezone(&ctx.tz());
    table.add_row(vec![
        Cell::new(&expense.id),
        Cell::new(local.format("%b %d, %Y %-I:%M %p").to_string()),
        Cell::new(&expense.description),
        ui::amount_cell(&ctx.formatter().input(expense.amount)),
    ]);
    table.to_string()
}

/// Records a new expense. With a `date` other than today the current
/// wall-clock time on that date is used.
pub async fn add(
    ctx: &AppContext,
    amount: f64,
    description: &str,
    date: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> Result<Expense> {
    let created_at = date.map(|date| entry_timestamp(date, now, ctx.tz()));
    let expense = ctx.expenses.add(amount, description, created_at).await?;
    println!(
        "{}\n{}",
        ui::paint("Expense added", ui::Tone::Emphasis),
        describe(ctx, &expense)
    );
    Ok(expense)
}

pub async fn edit(ctx: &AppContext, id: &str, amount: f64, description: &str) -> Result<Expense> {
    let expense = ctx.expenses.update(id, amount, description).await?;
    println!(
        "{}\n{}",
        ui::paint("Expense updated", ui::Tone::Emphasis),
        describe(ctx, &expense)
    );
    Ok(expense)
}

pub async fn delete(ctx: &AppContext, id: &str) -> Result<Expense> {
    let expense = ctx.expenses.delete(id).await?;
    println!(
        "{}\n{}",
        ui::paint("Expense deleted", ui::Tone::Warning),
        describe(ctx, &expense)
    );
    Ok(expense)
}

pub async fn clear(ctx: &AppContext) -> Result<()> {
    ctx.expenses.clear().await?;
    println!("{}", ui::paint("All expenses cleared", ui::Tone::Hint));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AppConfig;
    use crate::store::MemoryStore;
    use chrono::TimeZone;
    use std::sync::Arc;

    async fn context() -> AppContext {
        AppContext::with_store(AppConfig::default(), Arc::new(MemoryStore::new()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_backdated_keeps_wall_clock_time() {
        let ctx = context().await;
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 14, 25, 0).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap();

        let expense = add(&ctx, 9.99, "Cinema", Some(date), now).await.unwrap();
        assert_eq!(
            expense.created_at,
            Utc.with_ymd_and_hms(2025, 6, 7, 14, 25, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_edit_delete_clear() {
        let ctx = context().await;
        let now = Utc::now();
        let first = add(&ctx, 3.0, "Tea", None, now).await.unwrap();
        add(&ctx, 8.0, "Sandwich", None, now).await.unwrap();

        let edited = edit(&ctx, &first.id, 3.5, "Green tea").await.unwrap();
        assert_eq!(edited.description, "Green tea");

        delete(&ctx, &first.id).await.unwrap();
        assert_eq!(ctx.expenses.list().await.unwrap().len(), 1);

        clear(&ctx).await.unwrap();
        assert!(ctx.expenses.list().await.unwrap().is_empty());
    }
}
