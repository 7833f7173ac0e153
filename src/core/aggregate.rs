//! Totals over time ranges and day-bucketed grouping of expenses.
use crate::core::expense::Expense;
use crate::core::period::{Period, ViewMode, local_date};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::collections::BTreeMap;

/// Sums the amounts of records with `start <= created_at <= end`.
///
/// A reversed interval matches nothing and yields `0.0`.
pub fn total_for_period(records: &[Expense], start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    records
        .iter()
        .filter(|expense| start <= expense.created_at && expense.created_at <= end)
        .map(|expense| expense.amount)
        .sum()
}

pub fn filter_period<'a>(records: &'a [Expense], period: &Period) -> Vec<&'a Expense> {
    records
        .iter()
        .filter(|expense| period.contains(expense.created_at))
        .collect()
}

/// Expenses that fall on one calendar day, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup<'a> {
    pub date: NaiveDate,
    pub expenses: Vec<&'a Expense>,
}

impl DayGroup<'_> {
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }
}

/// Groups records for display.
///
/// Daily mode yields a single group for `selected` holding every record.
/// Weekly and monthly modes bucket records by their local calendar day in
/// `tz`, with the most recent day first. Within a group records are sorted
/// by [`Expense::newest_first`].
pub fn group_by_day<'a, I>(
    records: I,
    mode: ViewMode,
    selected: NaiveDate,
    tz: Tz,
) -> Vec<DayGroup<'a>>
where
    I: IntoIterator<Item = &'a Expense>,
{
    if mode == ViewMode::Daily {
        let mut expenses: Vec<&Expense> = records.into_iter().collect();
        expenses.sort_by(|a, b| Expense::newest_first(a, b));
        return vec![DayGroup {
            date: selected,
            expenses,
        }];
    }

    let mut groups: BTreeMap<NaiveDate, Vec<&Expense>> = BTreeMap::new();
    for expense in records {
        groups
            .entry(local_date(expense.created_at, tz))
            .or_default()
            .push(expense);
    }

    groups
        .into_iter()
        .rev()
        .map(|(date, mut expenses)| {
            expenses.sort_by(|a, b| Expense::newest_first(a, b));
            DayGroup { date, expenses }
        })
        .collect()
}
