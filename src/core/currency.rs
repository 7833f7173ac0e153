//! Built-in currency table

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

const fn currency(code: &'static str, name: &'static str, symbol: &'static str) -> Currency {
    Currency { code, name, symbol }
}

pub const CURRENCIES: &[Currency] = &[
    currency("USD", "United States Dollar", "$"),
    currency("EUR", "Euro", "€"),
    currency("GBP", "British Pound Sterling", "£"),
    currency("JPY", "Japanese Yen", "¥"),
    currency("CAD", "Canadian Dollar", "C$"),
    currency("AUD", "Australian Dollar", "A$"),
    currency("CHF", "Swiss Franc", "CHF"),
    currency("CNY", "Chinese Yuan", "¥"),
    currency("INR", "Indian Rupee", "₹"),
    currency("KRW", "South Korean Won", "₩"),
    currency("SGD", "Singapore Dollar", "S$"),
    currency("HKD", "Hong Kong Dollar", "HK$"),
    currency("THB", "Thai Baht", "฿"),
    currency("MYR", "Malaysian Ringgit", "RM"),
    currency("IDR", "Indonesian Rupiah", "Rp"),
    currency("PHP", "Philippine Peso", "₱"),
    currency("VND", "Vietnamese Dong", "₫"),
    currency("TWD", "Taiwan Dollar", "NT$"),
    currency("PKR", "Pakistani Rupee", "₨"),
    currency("BDT", "Bangladeshi Taka", "৳"),
    currency("NOK", "Norwegian Krone", "kr"),
    currency("SEK", "Swedish Krona", "kr"),
    currency("DKK", "Danish Krone", "kr"),
    currency("PLN", "Polish Złoty", "zł"),
    currency("BRL", "Brazilian Real", "R$"),
    currency("MXN", "Mexican Peso", "$"),
    currency("ZAR", "South African Rand", "R"),
    currency("NZD", "New Zealand Dollar", "NZ$"),
    currency("AED", "UAE Dirham", "د.إ"),
    currency("TRY", "Turkish Lira", "₺"),
];

/// Looks up a currency by ISO code, ignoring case.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .iter()
        .find(|currency| currency.code.eq_ignore_ascii_case(code.trim()))
}
