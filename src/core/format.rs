//! Currency formatting with magnitude suffixes (K, M, B, T).
//!
//! Amounts below a configurable threshold are rendered in full with `,`
//! thousands separators. Larger amounts are scaled down to the largest
//! matching tier and shown with a precision that keeps the number of
//! significant digits roughly constant.

use anyhow::anyhow;
use std::fmt::Display;
use std::str::FromStr;

const TIERS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

const MAX_SUFFIX_DECIMALS: u8 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    /// Currency symbol prepended to the number.
    pub symbol: String,
    /// Render up to two decimals for amounts below the suffix threshold.
    pub show_decimals: bool,
    /// Always render exactly two decimals.
    pub force_decimals: bool,
    /// Absolute value at or above which a suffix is used.
    pub min_value_for_suffix: f64,
    /// Upper bound on decimals once a suffix is applied, clamped to 0..=4.
    pub max_decimals: u8,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            symbol: "$".to_string(),
            show_decimals: true,
            force_decimals: false,
            min_value_for_suffix: 1000.0,
            max_decimals: MAX_SUFFIX_DECIMALS,
        }
    }
}

impl FormatOptions {
    pub fn with_symbol(symbol: &str) -> Self {
        FormatOptions {
            symbol: symbol.to_string(),
            ..Default::default()
        }
    }
}

/// Formats `amount` as a currency string such as `$999.50`, `$1.2346K` or `-$1.5M`.
///
/// `NaN` renders as `{symbol}NaN` and infinities as `{sign}{symbol}∞`.
pub fn format_currency(amount: f64, options: &FormatOptions) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let absolute = amount.abs();
    let symbol = &options.symbol;

    if absolute.is_nan() {
        return format!("{symbol}NaN");
    }
    if absolute.is_infinite() {
        return format!("{sign}{symbol}∞");
    }

    if absolute < options.min_value_for_suffix {
        return format!("{sign}{symbol}{}", format_plain(absolute, options));
    }

    for (value, suffix) in TIERS {
        if absolute >= value {
            let scaled = absolute / value;
            let decimals = suffix_decimals(scaled, options);
            let min_decimals = if options.force_decimals { decimals } else { 0 };
            return format!(
                "{sign}{symbol}{}{suffix}",
                format_number(scaled, min_decimals, decimals)
            );
        }
    }

    // Only reachable when the threshold is configured below the smallest tier.
    format!("{sign}{symbol}{}", format_plain(absolute, options))
}

fn format_plain(absolute: f64, options: &FormatOptions) -> String {
    if options.force_decimals {
        format_number(absolute, 2, 2)
    } else if options.show_decimals {
        format_number(absolute, 0, 2)
    } else {
        format_number(absolute, 0, 0)
    }
}

fn suffix_decimals(scaled: f64, options: &FormatOptions) -> usize {
    if options.force_decimals {
        return 2;
    }
    if !options.show_decimals {
        return 0;
    }

    let max = options.max_decimals.min(MAX_SUFFIX_DECIMALS);
    let decimals = if scaled < 10.0 {
        max.min(4)
    } else if scaled < 100.0 {
        max.min(3)
    } else if scaled < 1000.0 {
        max.min(2)
    } else {
        max.min(1)
    };
    decimals as usize
}

/// Renders a non-negative number with `,` grouping, rounding half away from
/// zero to `max_fraction` digits and trimming trailing zeros down to
/// `min_fraction` digits.
fn format_number(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    let min_fraction = min_fraction.min(max_fraction);
    let rounded = round_half_away(value, max_fraction);
    let fixed = format!("{rounded:.max_fraction$}");

    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let keep = fraction.trim_end_matches('0').len().max(min_fraction);
    let fraction = &fraction[..keep];

    let grouped = group_thousands(integer);
    if fraction.is_empty() {
        grouped
    } else {
        format!("{grouped}.{fraction}")
    }
}

fn round_half_away(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
        return value;
    }
    scaled.round() / factor
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Named option sets used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// Suffixes from 1K, up to 4 decimals.
    #[default]
    Standard,
    /// Suffixes from 1K, up to 3 decimals.
    Compact,
    /// Suffixes only from 10K, always 2 decimals.
    Detailed,
    /// Never suffixed, always 2 decimals. Used for editable values.
    Input,
    /// Same as `Standard`; used for summary figures.
    Analytics,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Standard,
        Preset::Compact,
        Preset::Detailed,
        Preset::Input,
        Preset::Analytics,
    ];

    pub fn options(self, symbol: &str) -> FormatOptions {
        let base = FormatOptions::with_symbol(symbol);
        match self {
            Preset::Standard | Preset::Analytics => base,
            Preset::Compact => FormatOptions {
                max_decimals: 3,
                ..base
            },
            Preset::Detailed => FormatOptions {
                force_decimals: true,
                min_value_for_suffix: 10_000.0,
                ..base
            },
            Preset::Input => FormatOptions {
                force_decimals: true,
                min_value_for_suffix: f64::INFINITY,
                ..base
            },
        }
    }

    pub fn format(self, amount: f64, symbol: &str) -> String {
        format_currency(amount, &self.options(symbol))
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Preset::Standard => "standard",
                Preset::Compact => "compact",
                Preset::Detailed => "detailed",
                Preset::Input => "input",
                Preset::Analytics => "analytics",
            }
        )
    }
}

impl FromStr for Preset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Preset::Standard),
            "compact" => Ok(Preset::Compact),
            "detailed" => Ok(Preset::Detailed),
            "input" => Ok(Preset::Input),
            "analytics" => Ok(Preset::Analytics),
            _ => Err(anyhow!("Invalid format preset: {}", s)),
        }
    }
}

/// Formats amounts with a fixed currency symbol.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    symbol: String,
}

impl CurrencyFormatter {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn standard(&self, amount: f64) -> String {
        Preset::Standard.format(amount, &self.symbol)
    }

    pub fn compact(&self, amount: f64) -> String {
        Preset::Compact.format(amount, &self.symbol)
    }

    pub fn detailed(&self, amount: f64) -> String {
        Preset::Detailed.format(amount, &self.symbol)
    }

    pub fn input(&self, amount: f64) -> String {
        Preset::Input.format(amount, &self.symbol)
    }

    pub fn analytics(&self, amount: f64) -> String {
        Preset::Analytics.format(amount, &self.symbol)
    }
}
