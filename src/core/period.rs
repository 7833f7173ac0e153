//! Calendar periods (day, week, month) and navigation between them.
//!
//! All boundaries are computed in the user's timezone and returned as UTC
//! instants. A period's `end` is inclusive: the last millisecond before the
//! next period starts.

use anyhow::anyhow;
use chrono::{
    DateTime, Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ViewMode::Daily => "daily",
                ViewMode::Weekly => "weekly",
                ViewMode::Monthly => "monthly",
            }
        )
    }
}

impl FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Ok(ViewMode::Daily),
            "weekly" | "week" => Ok(ViewMode::Weekly),
            "monthly" | "month" => Ok(ViewMode::Monthly),
            _ => Err(anyhow!("Invalid view mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Prev,
    Next,
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prev" | "previous" => Ok(Direction::Prev),
            "next" => Ok(Direction::Next),
            _ => Err(anyhow!("Invalid direction: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Calendar date of `instant` in `tz`.
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// First instant of `date` in `tz`. Skips forward past DST gaps at midnight.
pub fn start_of_day(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=2)
        .find_map(|hours| {
            tz.from_local_datetime(&(midnight + Duration::hours(hours)))
                .earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

/// Last millisecond of `date` in `tz`.
pub fn end_of_day(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    match date.checked_add_days(Days::new(1)) {
        Some(next) => start_of_day(next, tz) - Duration::milliseconds(1),
        None => DateTime::<Utc>::MAX_UTC,
    }
}

pub fn day_range(date: NaiveDate, tz: Tz) -> Period {
    Period {
        start: start_of_day(date, tz),
        end: end_of_day(date, tz),
    }
}

/// First and last calendar day of the period containing `date`.
pub fn date_span(mode: ViewMode, date: NaiveDate, week_start: WeekStart) -> (NaiveDate, NaiveDate) {
    match mode {
        ViewMode::Daily => (date, date),
        ViewMode::Weekly => {
            let offset = (date.weekday().num_days_from_sunday() + 7
                - week_start.weekday().num_days_from_sunday())
                % 7;
            let first = date
                .checked_sub_days(Days::new(offset.into()))
                .unwrap_or(date);
            let last = first.checked_add_days(Days::new(6)).unwrap_or(first);
            (first, last)
        }
        ViewMode::Monthly => {
            let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
            let last = first
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .unwrap_or(first);
            (first, last)
        }
    }
}

/// The day, week or month containing `date`.
pub fn period_range(mode: ViewMode, date: NaiveDate, tz: Tz, week_start: WeekStart) -> Period {
    let (first, last) = date_span(mode, date, week_start);
    Period {
        start: start_of_day(first, tz),
        end: end_of_day(last, tz),
    }
}

/// Moves `date` by one day, week or calendar month. Month steps clamp the day
/// to the end of shorter months.
pub fn shift_date(mode: ViewMode, date: NaiveDate, direction: Direction) -> NaiveDate {
    let shifted = match (mode, direction) {
        (ViewMode::Daily, Direction::Next) => date.checked_add_days(Days::new(1)),
        (ViewMode::Daily, Direction::Prev) => date.checked_sub_days(Days::new(1)),
        (ViewMode::Weekly, Direction::Next) => date.checked_add_days(Days::new(7)),
        (ViewMode::Weekly, Direction::Prev) => date.checked_sub_days(Days::new(7)),
        (ViewMode::Monthly, Direction::Next) => date.checked_add_months(Months::new(1)),
        (ViewMode::Monthly, Direction::Prev) => date.checked_sub_months(Months::new(1)),
    };
    shifted.unwrap_or(date)
}

/// Whether moving from `selected` in `direction` stays out of the future.
///
/// Going back is always allowed. Going forward in daily mode may reach today
/// but not beyond it; in weekly and monthly mode the target period must have
/// started by `now`.
pub fn is_navigation_allowed(
    direction: Direction,
    mode: ViewMode,
    selected: NaiveDate,
    now: DateTime<Utc>,
    tz: Tz,
    week_start: WeekStart,
) -> bool {
    match direction {
        Direction::Prev => true,
        Direction::Next => {
            let candidate = shift_date(mode, selected, Direction::Next);
            match mode {
                ViewMode::Daily => candidate <= local_date(now, tz),
                ViewMode::Weekly | ViewMode::Monthly => {
                    period_range(mode, candidate, tz, week_start).start <= now
                }
            }
        }
    }
}

/// Returns the shifted date, or `None` when the move would enter the future.
pub fn navigate(
    direction: Direction,
    mode: ViewMode,
    selected: NaiveDate,
    now: DateTime<Utc>,
    tz: Tz,
    week_start: WeekStart,
) -> Option<NaiveDate> {
    is_navigation_allowed(direction, mode, selected, now, tz, week_start)
        .then(|| shift_date(mode, selected, direction))
}

pub fn period_label(
    mode: ViewMode,
    date: NaiveDate,
    today: NaiveDate,
    week_start: WeekStart,
) -> String {
    match mode {
        ViewMode::Daily if date == today => "Today".to_string(),
        ViewMode::Daily => date.format("%b %d, %Y").to_string(),
        ViewMode::Weekly => {
            let (first, last) = date_span(mode, date, week_start);
            format!("{} - {}", first.format("%b %d"), last.format("%b %d"))
        }
        ViewMode::Monthly => date.format("%B %Y").to_string(),
    }
}

/// Timestamp for an expense entered while `selected` is shown: `now` when
/// the selected day is today, otherwise the current wall-clock time on the
/// selected day.
pub fn entry_timestamp(selected: NaiveDate, now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let local_now = now.with_timezone(&tz);
    if local_now.date_naive() == selected {
        return now;
    }

    let naive: NaiveDateTime = selected.and_time(local_now.time());
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| {
            let offset = local_now.offset().fix().local_minus_utc();
            Utc.from_utc_datetime(&(naive - Duration::seconds(offset.into())))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!("Weekly".parse::<ViewMode>().unwrap(), ViewMode::Weekly);
        assert_eq!("month".parse::<ViewMode>().unwrap(), ViewMode::Monthly);
        assert!("yearly".parse::<ViewMode>().is_err());
        assert_eq!("next".parse::<Direction>().unwrap(), Direction::Next);
    }

    #[test]
    fn test_day_range_in_timezone() {
        let tz: Tz = "America/New_York".parse().unwrap();
        let period = day_range(date(2025, 1, 15), tz);
        assert_eq!(period.start, utc(2025, 1, 15, 5, 0));
        assert_eq!(
            period.end,
            utc(2025, 1, 16, 5, 0) - Duration::milliseconds(1)
        );
        assert!(period.contains(period.start));
        assert!(period.contains(period.end));
        assert!(!period.contains(utc(2025, 1, 16, 5, 0)));
    }

    #[test]
    fn test_day_range_across_dst_change() {
        let tz: Tz = "America/New_York".parse().unwrap();
        // Clocks spring forward on 2025-03-09, so the day is 23 hours long.
        let period = day_range(date(2025, 3, 9), tz);
        assert_eq!(period.start, utc(2025, 3, 9, 5, 0));
        assert_eq!(
            period.end + Duration::milliseconds(1),
            utc(2025, 3, 10, 4, 0)
        );
    }

    #[test]
    fn test_week_span() {
        // 2025-01-15 is a Wednesday
        assert_eq!(
            date_span(ViewMode::Weekly, date(2025, 1, 15), WeekStart::Sunday),
            (date(2025, 1, 12), date(2025, 1, 18))
        );
        assert_eq!(
            date_span(ViewMode::Weekly, date(2025, 1, 15), WeekStart::Monday),
            (date(2025, 1, 13), date(2025, 1, 19))
        );
        assert_eq!(
            date_span(ViewMode::Weekly, date(2025, 1, 12), WeekStart::Monday),
            (date(2025, 1, 6), date(2025, 1, 12))
        );
    }

    #[test]
    fn test_month_span() {
        assert_eq!(
            date_span(ViewMode::Monthly, date(2024, 2, 10), WeekStart::Sunday),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            date_span(ViewMode::Monthly, date(2025, 12, 31), WeekStart::Sunday),
            (date(2025, 12, 1), date(2025, 12, 31))
        );
    }

    #[test]
    fn test_shift_date() {
        assert_eq!(
            shift_date(ViewMode::Daily, date(2025, 1, 31), Direction::Next),
            date(2025, 2, 1)
        );
        assert_eq!(
            shift_date(ViewMode::Weekly, date(2025, 1, 3), Direction::Prev),
            date(2024, 12, 27)
        );
        assert_eq!(
            shift_date(ViewMode::Monthly, date(2025, 1, 31), Direction::Next),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn test_daily_navigation_guard() {
        let tz = Tz::UTC;
        let now = utc(2025, 6, 10, 15, 0);
        let today = date(2025, 6, 10);
        let yesterday = date(2025, 6, 9);

        assert!(!is_navigation_allowed(
            Direction::Next,
            ViewMode::Daily,
            today,
            now,
            tz,
            WeekStart::Sunday
        ));
        assert!(is_navigation_allowed(
            Direction::Next,
            ViewMode::Daily,
            yesterday,
            now,
            tz,
            WeekStart::Sunday
        ));
        assert!(is_navigation_allowed(
            Direction::Prev,
            ViewMode::Daily,
            today,
            now,
            tz,
            WeekStart::Sunday
        ));
    }

    #[test]
    fn test_daily_navigation_uses_local_today() {
        // 02:00 UTC on June 10 is still June 9 in Los Angeles.
        let tz: Tz = "America/Los_Angeles".parse().unwrap();
        let now = utc(2025, 6, 10, 2, 0);
        assert!(!is_navigation_allowed(
            Direction::Next,
            ViewMode::Daily,
            date(2025, 6, 9),
            now,
            tz,
            WeekStart::Sunday
        ));
    }

    #[test]
    fn test_weekly_and_monthly_navigation_guard() {
        let tz = Tz::UTC;
        // Tuesday
        let now = utc(2025, 6, 10, 15, 0);

        // From last week we can move into the current week.
        assert!(is_navigation_allowed(
            Direction::Next,
            ViewMode::Weekly,
            date(2025, 6, 3),
            now,
            tz,
            WeekStart::Sunday
        ));
        // The week after the current one has not started.
        assert!(!is_navigation_allowed(
            Direction::Next,
            ViewMode::Weekly,
            date(2025, 6, 10),
            now,
            tz,
            WeekStart::Sunday
        ));

        assert!(is_navigation_allowed(
            Direction::Next,
            ViewMode::Monthly,
            date(2025, 5, 20),
            now,
            tz,
            WeekStart::Sunday
        ));
        assert!(!is_navigation_allowed(
            Direction::Next,
            ViewMode::Monthly,
            date(2025, 6, 1),
            now,
            tz,
            WeekStart::Sunday
        ));

        // A period starting exactly at `now` is reachable, a millisecond
        // earlier it is not.
        let week_begins = utc(2025, 6, 8, 0, 0);
        assert!(is_navigation_allowed(
            Direction::Next,
            ViewMode::Weekly,
            date(2025, 6, 3),
            week_begins,
            tz,
            WeekStart::Sunday
        ));
        assert!(!is_navigation_allowed(
            Direction::Next,
            ViewMode::Weekly,
            date(2025, 6, 3),
            week_begins - Duration::milliseconds(1),
            tz,
            WeekStart::Sunday
        ));
        let month_begins = utc(2025, 7, 1, 0, 0);
        assert!(is_navigation_allowed(
            Direction::Next,
            ViewMode::Monthly,
            date(2025, 6, 15),
            month_begins,
            tz,
            WeekStart::Sunday
        ));
        assert!(!is_navigation_allowed(
            Direction::Next,
            ViewMode::Monthly,
            date(2025, 6, 15),
            month_begins - Duration::milliseconds(1),
            tz,
            WeekStart::Sunday
        ));

        // On Sunday Jun 8 a Monday-start week (Jun 2 - Jun 8) is still
        // current, while a Sunday-start week has already rolled over.
        let sunday = utc(2025, 6, 8, 12, 0);
        assert!(!is_navigation_allowed(
            Direction::Next,
            ViewMode::Weekly,
            date(2025, 6, 5),
            sunday,
            tz,
            WeekStart::Monday
        ));
        assert!(is_navigation_allowed(
            Direction::Next,
            ViewMode::Weekly,
            date(2025, 6, 5),
            sunday,
            tz,
            WeekStart::Sunday
        ));
        assert!(is_navigation_allowed(
            Direction::Next,
            ViewMode::Weekly,
            date(2025, 6, 5),
            utc(2025, 6, 9, 0, 0),
            tz,
            WeekStart::Monday
        ));
    }

    #[test]
    fn test_navigate() {
        let now = utc(2025, 6, 10, 15, 0);
        assert_eq!(
            navigate(
                Direction::Prev,
                ViewMode::Monthly,
                date(2025, 6, 10),
                now,
                Tz::UTC,
                WeekStart::Sunday
            ),
            Some(date(2025, 5, 10))
        );
        assert_eq!(
            navigate(
                Direction::Next,
                ViewMode::Daily,
                date(2025, 6, 10),
                now,
                Tz::UTC,
                WeekStart::Sunday
            ),
            None
        );
    }

    #[test]
    fn test_period_label() {
        let today = date(2025, 6, 10);
        assert_eq!(
            period_label(ViewMode::Daily, today, today, WeekStart::Sunday),
            "Today"
        );
        assert_eq!(
            period_label(ViewMode::Daily, date(2025, 6, 3), today, WeekStart::Sunday),
            "Jun 03, 2025"
        );
        assert_eq!(
            period_label(ViewMode::Weekly, today, today, WeekStart::Sunday),
            "Jun 08 - Jun 14"
        );
        assert_eq!(
            period_label(ViewMode::Monthly, today, today, WeekStart::Sunday),
            "June 2025"
        );
    }

    #[test]
    fn test_entry_timestamp() {
        let tz: Tz = "Asia/Kolkata".parse().unwrap();
        let now = utc(2025, 6, 10, 6, 30);

        assert_eq!(entry_timestamp(date(2025, 6, 10), now, tz), now);

        // Local time is 12:00 in Kolkata (UTC+5:30), kept on the selected day.
        assert_eq!(
            entry_timestamp(date(2025, 6, 1), now, tz),
            utc(2025, 6, 1, 6, 30)
        );
    }
}
