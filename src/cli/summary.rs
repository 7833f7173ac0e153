use super::ui;
use crate::context::AppContext;
use crate::core::analytics::{SpendingSummary, Trend, spending_summary};
use crate::core::format::CurrencyFormatter;
use anyhow::Result;
use chrono::{DateTime, Utc};
use comfy_table::Cell;

impl SpendingSummary {
    pub fn display_as_table(&self, formatter: &CurrencyFormatter) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Period"),
            ui::header_cell(&format!("Spent ({})", formatter.symbol())),
            ui::header_cell("Change"),
        ]);

        let rows = [
            ("This Week", self.this_week, self.weekly_change(), "last week"),
            ("This Month", self.this_month, self.monthly_change(), "last month"),
        ];
        for (label, total, change, against) in rows {
            let sign = if change > 0.0 { "+" } else { "" };
            let change_text = format!("{sign}{} vs {against}", formatter.detailed(change.abs()));
            table.add_row(vec![
                Cell::new(label),
                ui::amount_cell(&formatter.analytics(total)),
                ui::change_cell(change, &change_text),
            ]);
        }

        let mut quick = ui::new_styled_table();
        quick.set_header(vec![ui::header_cell("Quick Summary"), ui::header_cell("")]);
        quick.add_row(vec![
            Cell::new("Total Expenses"),
            ui::amount_cell(&self.expense_count.to_string()),
        ]);
        quick.add_row(vec![
            Cell::new("Average per Day"),
            ui::amount_cell(&formatter.analytics(self.average_per_day)),
        ]);
        quick.add_row(vec![
            Cell::new("Largest Expense"),
            ui::amount_cell(&formatter.analytics(self.largest_expense)),
        ]);

        let mut output = format!("{}\n\n", ui::paint("Analytics", ui::Tone::Heading));
        output.push_str(&table.to_string());
        output.push_str("\n\n");
        output.push_str(&quick.to_string());
        output
    }

    pub fn insight(&self, formatter: &CurrencyFormatter) -> String {
        match self.weekly_trend() {
            Trend::Up => format!(
                "You've spent {} more this week. Consider reviewing your expenses.",
                formatter.detailed(self.weekly_change())
            ),
            Trend::Down => format!(
                "Great job! You've saved {} compared to last week.",
                formatter.detailed(self.weekly_change().abs())
            ),
            Trend::Flat => "Your spending is consistent with last week.".to_string(),
        }
    }
}

pub async fn run(ctx: &AppContext, now: DateTime<Utc>) -> Result<()> {
    let expenses = ctx.expenses.list().await?;
    let summary = spending_summary(&expenses, now, ctx.tz(), ctx.config.week_start);
    let formatter = ctx.formatter();
    println!("{}", summary.display_as_table(&formatter));
    ui::print_separator();
    println!("{}", summary.insight(&formatter));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(this_week: f64, last_week: f64) -> SpendingSummary {
        SpendingSummary {
            this_week,
            last_week,
            this_month: 25_000.0,
            last_month: 18_000.0,
            expense_count: 42,
            average_per_day: this_week / 7.0,
            largest_expense: 1_500.0,
        }
    }

    #[test]
    fn test_insight_messages() {
        let formatter = CurrencyFormatter::new("$");
        assert_eq!(
            summary(120.0, 100.0).insight(&formatter),
            "You've spent $20.00 more this week. Consider reviewing your expenses."
        );
        assert_eq!(
            summary(70.0, 100.0).insight(&formatter),
            "Great job! You've saved $30.00 compared to last week."
        );
        assert_eq!(
            summary(70.0, 70.0).insight(&formatter),
            "Your spending is consistent with last week."
        );
    }

    #[test]
    fn test_display_as_table() {
        let formatter = CurrencyFormatter::new("€");
        let output = summary(700.0, 350.0).display_as_table(&formatter);
        assert!(output.contains("€700"));
        assert!(output.contains("+€350.00 vs last week"));
        assert!(output.contains("€25K"));
        assert!(output.contains("+€7,000.00 vs last month"));
        assert!(output.contains("42"));
        assert!(output.contains("€1.5K"));
    }
}
