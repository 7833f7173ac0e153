//! Core business logic: expense records, periods, totals and formatting

pub mod aggregate;
pub mod analytics;
pub mod config;
pub mod currency;
pub mod expense;
pub mod format;
pub mod log;
pub mod period;
pub mod settings;

// Re-export main types for cleaner imports
pub use aggregate::{DayGroup, group_by_day, total_for_period};
pub use expense::{Expense, ExpenseError};
pub use format::{CurrencyFormatter, FormatOptions, Preset, format_currency};
pub use period::{Direction, Period, ViewMode, WeekStart, is_navigation_allowed};
pub use settings::{SettingsUpdate, UserSettings};
