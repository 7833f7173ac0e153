use super::ui;
use crate::context::AppContext;
use crate::core::Expense;
use crate::core::aggregate::{DayGroup, filter_period, group_by_day};
use crate::core::analytics::period_totals;
use crate::core::format::CurrencyFormatter;
use crate::core::period::{
    Direction, ViewMode, WeekStart, local_date, navigate, period_label, period_range,
};
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use comfy_table::Cell;
use std::fmt::Display;

/// What a listing is built from; decoupled from the store so it can be
/// rendered for any set of records.
pub struct ListView<'a> {
    pub expenses: &'a [Expense],
    pub mode: ViewMode,
    pub selected: NaiveDate,
    pub now: DateTime<Utc>,
    pub tz: Tz,
    pub week_start: WeekStart,
    pub formatter: CurrencyFormatter,
}

impl Display for ListView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let today = local_date(self.now, self.tz);
        let period = period_range(self.mode, self.selected, self.tz, self.week_start);
        let in_period = filter_period(self.expenses, &period);
        let totals = period_totals(
            self.expenses,
            self.mode,
            self.selected,
            self.tz,
            self.week_start,
        );

        let label = period_label(self.mode, self.selected, today, self.week_start);
        writeln!(f, "{} ({})", ui::paint(&label, ui::Tone::Heading), self.mode)?;

        if in_period.is_empty() {
            let empty = "No expenses recorded for this period.";
            writeln!(f, "\n{}", ui::paint(empty, ui::Tone::Hint))?;
        } else {
            for group in group_by_day(in_period, self.mode, self.selected, self.tz) {
                writeln!(f)?;
                if self.mode != ViewMode::Daily {
                    writeln!(f, "{}", self.day_header(&group, today))?;
                }
                writeln!(f, "{}", self.group_table(&group))?;
            }
        }

        let total = self.formatter.detailed(totals.current);
        write!(f, "\nTotal: {}", ui::paint(&total, ui::Tone::Amount))?;
        if self.mode == ViewMode::Daily {
            let previous = self.formatter.detailed(totals.previous_day);
            write!(f, "\nPrevious day: {previous}")?;
        }

        write!(f, "\n\n{}", self.navigation_hint())
    }
}

impl ListView<'_> {
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn day_header(&self, group: &DayGroup, today: NaiveDate) -> String {
        let label = if group.date == today {
            "Today".to_string()
        } else {
            group.date.format("%b %d, %Y").to_string()
        };
        format!(
            "{} {}",
            ui::paint(&label, ui::Tone::Emphasis),
            ui::paint(
                &format!("({})", self.formatter.detailed(group.total())),
                ui::Tone::Hint
            )
        )
    }

    fn group_table(&self, group: &DayGroup) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Time"),
            ui::header_cell("Description"),
            ui::header_cell(&format!("Amount ({})", self.formatter.symbol())),
            ui::header_cell("Id"),
        ]);

        for expense in &group.expenses {
            let time = expense.created_at.with_timezone(&self.tz).format("%-I:%M %p");
            table.add_row(vec![
                Cell::new(time.to_string()),
                Cell::new(&expense.description),
                ui::amount_cell(&self.formatter.detailed(expense.amount)),
                Cell::new(&expense.id),
            ]);
        }
        table.to_string()
    }

    fn navigation_hint(&self) -> String {
        let step = |direction| {
            navigate(
                direction,
                self.mode,
                self.selected,
                self.now,
                self.tz,
                self.week_start,
            )
        };

        let mut hints = Vec::new();
        if let Some(prev) = step(Direction::Prev) {
            hints.push(format!("previous: --date {prev}"));
        }
        if let Some(next) = step(Direction::Next) {
            hints.push(format!("next: --date {next}"));
        }
        ui::paint(&hints.join("  |  "), ui::Tone::Hint)
    }
}

pub async fn run(
    ctx: &AppContext,
    mode: ViewMode,
    selected: NaiveDate,
    now: DateTime<Utc>,
) -> Result<()> {
    let expenses = ctx.expenses.list().await?;
    let view = ListView {
        expenses: &expenses,
        mode,
        selected,
        now,
        tz: ctx.tz(),
        week_start: ctx.config.week_start,
        formatter: ctx.formatter(),
    };
    println!("{}", view.render());
    Ok(())
}
