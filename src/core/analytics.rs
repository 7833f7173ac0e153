//! Spending summaries built from period totals.
use crate::core::aggregate::total_for_period;
use crate::core::expense::Expense;
use crate::core::period::{
    Direction, Period, ViewMode, WeekStart, day_range, local_date, period_range, shift_date,
};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn between(current: f64, previous: f64) -> Self {
        if current > previous {
            Trend::Up
        } else if current < previous {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Totals for the current and previous week and month, relative to `now`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    pub this_week: f64,
    pub last_week: f64,
    pub this_month: f64,
    pub last_month: f64,
    pub expense_count: usize,
    pub average_per_day: f64,
    pub largest_expense: f64,
}

impl SpendingSummary {
    pub fn weekly_change(&self) -> f64 {
        self.this_week - self.last_week
    }

    pub fn monthly_change(&self) -> f64 {
        self.this_month - self.last_month
    }

    pub fn weekly_trend(&self) -> Trend {
        Trend::between(self.this_week, self.last_week)
    }

    pub fn monthly_trend(&self) -> Trend {
        Trend::between(self.this_month, self.last_month)
    }
}

fn period_total(records: &[Expense], period: Period) -> f64 {
    total_for_period(records, period.start, period.end)
}

pub fn spending_summary(
    records: &[Expense],
    now: DateTime<Utc>,
    tz: Tz,
    week_start: WeekStart,
) -> SpendingSummary {
    let today = local_date(now, tz);
    let last_week_day = shift_date(ViewMode::Weekly, today, Direction::Prev);
    let last_month_day = shift_date(ViewMode::Monthly, today, Direction::Prev);

    let this_week = period_total(records, period_range(ViewMode::Weekly, today, tz, week_start));
    let last_week = period_total(
        records,
        period_range(ViewMode::Weekly, last_week_day, tz, week_start),
    );
    let this_month = period_total(records, period_range(ViewMode::Monthly, today, tz, week_start));
    let last_month = period_total(
        records,
        period_range(ViewMode::Monthly, last_month_day, tz, week_start),
    );

    let largest_expense = records
        .iter()
        .map(|expense| expense.amount)
        .fold(0.0, f64::max);

    let summary = SpendingSummary {
        this_week,
        last_week,
        this_month,
        last_month,
        expense_count: records.len(),
        average_per_day: this_week / 7.0,
        largest_expense,
    };
    debug!("Computed spending summary: {summary:?}");
    summary
}

/// Total of the period shown for `selected` next to the total of the day
/// before `selected`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodTotals {
    pub current: f64,
    pub previous_day: f64,
}

pub fn period_totals(
    records: &[Expense],
    mode: ViewMode,
    selected: NaiveDate,
    tz: Tz,
    week_start: WeekStart,
) -> PeriodTotals {
    let previous_day = shift_date(ViewMode::Daily, selected, Direction::Prev);
    PeriodTotals {
        current: period_total(records, period_range(mode, selected, tz, week_start)),
        previous_day: period_total(records, day_range(previous_day, tz)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn expense(id: &str, amount: f64, created_at: DateTime<Utc>) -> Expense {
        Expense {
            id: id.to_string(),
            amount,
            description: id.to_string(),
            created_at,
        }
    }

    fn utc(m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, m, d, h, 0, 0).unwrap()
    }

    fn records() -> Vec<Expense> {
        vec![
            // current week (Sun Jun 8 - Sat Jun 14)
            expense("a", 21.0, utc(6, 10, 9)),
            expense("b", 7.0, utc(6, 8, 0)),
            // previous week, also current month
            expense("c", 50.0, utc(6, 3, 12)),
            // last month
            expense("d", 12.0, utc(5, 31, 23)),
            expense("e", 3.0, utc(5, 1, 0)),
            // older
            expense("f", 400.0, utc(4, 15, 10)),
        ]
    }

    #[test]
    fn test_spending_summary() {
        let now = utc(6, 10, 15);
        let summary = spending_summary(&records(), now, Tz::UTC, WeekStart::Sunday);

        assert_eq!(summary.this_week, 28.0);
        assert_eq!(summary.last_week, 50.0);
        assert_eq!(summary.this_month, 78.0);
        assert_eq!(summary.last_month, 15.0);
        assert_eq!(summary.weekly_change(), -22.0);
        assert_eq!(summary.monthly_change(), 63.0);
        assert_eq!(summary.expense_count, 6);
        assert_eq!(summary.average_per_day, 4.0);
        assert_eq!(summary.largest_expense, 400.0);
        assert_eq!(summary.weekly_trend(), Trend::Down);
        assert_eq!(summary.monthly_trend(), Trend::Up);
    }

    #[test]
    fn test_spending_summary_empty() {
        let summary = spending_summary(&[], utc(6, 10, 15), Tz::UTC, WeekStart::Monday);
        assert_eq!(summary.this_week, 0.0);
        assert_eq!(summary.largest_expense, 0.0);
        assert_eq!(summary.expense_count, 0);
        assert_eq!(summary.weekly_trend(), Trend::Flat);
    }

    #[test]
    fn test_period_totals() {
        let selected = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let totals = period_totals(&records(), ViewMode::Daily, selected, Tz::UTC, WeekStart::Sunday);
        assert_eq!(totals.current, 0.0);
        assert_eq!(totals.previous_day, 12.0);

        let totals = period_totals(
            &records(),
            ViewMode::Monthly,
            selected,
            Tz::UTC,
            WeekStart::Sunday,
        );
        assert_eq!(totals.current, 78.0);
    }
}
