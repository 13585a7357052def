//! Currency formatting for the French locale.
//!
//! Amounts are rendered the way the fr-FR locale does it: digits grouped by three
//! with a narrow no-break space, a decimal comma, two fraction digits, then a
//! no-break space and the currency symbol.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const GROUP_SEPARATOR: char = '\u{202f}';
const SYMBOL_SEPARATOR: char = '\u{a0}';
const DECIMAL_SEPARATOR: char = ',';

/// Currency amounts are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    /// Algerian dinar
    #[default]
    Dzd,
    /// Euro
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Dzd => "DZD",
            Self::Eur => "EUR",
        }
    }

    /// Symbol appended to formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Dzd => "DA",
            Self::Eur => "€",
        }
    }
}

impl FromStr for Currency {
    type Err = Error;

    /// Accepts the ISO code or, for the dinar, its local abbreviation "DA".
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DZD" | "DA" => Ok(Self::Dzd),
            "EUR" => Ok(Self::Eur),
            _ => Err(Error::UnknownCurrency {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Formats amounts in a single, configured currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrencyFormatter {
    currency: Currency,
}

impl CurrencyFormatter {
    /// Formatter for `currency`.
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Currency this formatter renders.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Formats an amount, e.g. `1234.5` as `"1 234,50 DA"`.
    ///
    /// Cents are rounded half away from zero on the shortest decimal form of the
    /// amount, so `1.005` shows as `1,01` even though its binary value is slightly
    /// below. An amount that rounds to zero is shown
    /// without a sign. Non-finite input renders as `NaN` or `∞` rather than panicking.
    #[must_use]
    pub fn format(&self, amount: f64) -> String {
        let symbol = self.currency.symbol();

        if amount.is_nan() {
            return format!("NaN{SYMBOL_SEPARATOR}{symbol}");
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{sign}∞{SYMBOL_SEPARATOR}{symbol}");
        }

        let (units, cents) = round_to_cents(amount.abs());
        let is_zero = units.bytes().all(|b| b == b'0') && cents == "00";
        let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

        format!(
            "{sign}{}{DECIMAL_SEPARATOR}{cents}{SYMBOL_SEPARATOR}{symbol}",
            group_thousands(&units)
        )
    }
}

/// Splits a non-negative finite amount into integer digits and two cent digits.
///
/// `f64` display never uses an exponent and prints the shortest decimal that reads
/// back to the same value; the rounding is done on those digits.
fn round_to_cents(magnitude: f64) -> (String, String) {
    let shortest = magnitude.to_string();
    let (units, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut fraction = fraction.bytes().chain(std::iter::repeat(b'0'));
    let mut digits: Vec<u8> = units.bytes().chain(fraction.by_ref().take(2)).collect();

    if fraction.next().is_some_and(|d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (units, cents) = digits.split_at(digits.len() - 2);
    (
        units.iter().copied().map(char::from).collect(),
        cents.iter().copied().map(char::from).collect(),
    )
}

/// Inserts the group separator every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn dinar(amount: f64) -> String {
        CurrencyFormatter::new(Currency::Dzd).format(amount)
    }

    #[test]
    fn test_format_groups_thousands_with_decimal_comma() {
        assert_eq!(dinar(1234.5), "1\u{202f}234,50\u{a0}DA");
        assert_eq!(dinar(1_234_567.891), "1\u{202f}234\u{202f}567,89\u{a0}DA");
        assert_eq!(dinar(999.0), "999,00\u{a0}DA");
        assert_eq!(dinar(100_000.0), "100\u{202f}000,00\u{a0}DA");
    }

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(dinar(0.0), "0,00\u{a0}DA");
        assert_eq!(dinar(0.5), "0,50\u{a0}DA");
        assert_eq!(dinar(0.07), "0,07\u{a0}DA");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(dinar(0.125), "0,13\u{a0}DA");
        assert_eq!(dinar(-0.125), "-0,13\u{a0}DA");
        assert_eq!(dinar(2.994), "2,99\u{a0}DA");
    }

    #[test]
    fn test_format_rounds_the_written_half_cent_up() {
        let euro = CurrencyFormatter::new(Currency::Eur);
        assert_eq!(euro.format(1.005), "1,01\u{a0}€");
        assert_eq!(euro.format(1.255), "1,26\u{a0}€");
        assert_eq!(euro.format(2.675), "2,68\u{a0}€");
        assert_eq!(euro.format(10.005), "10,01\u{a0}€");
        assert_eq!(dinar(0.285), "0,29\u{a0}DA");
        assert_eq!(dinar(-1.005), "-1,01\u{a0}DA");
    }

    #[test]
    fn test_format_rounding_carries_into_units() {
        assert_eq!(dinar(0.995), "1,00\u{a0}DA");
        assert_eq!(dinar(999.999), "1\u{202f}000,00\u{a0}DA");
    }

    #[test]
    fn test_format_negative_amounts() {
        assert_eq!(dinar(-1500.0), "-1\u{202f}500,00\u{a0}DA");
        // Rounds to zero, so no sign
        assert_eq!(dinar(-0.001), "0,00\u{a0}DA");
        assert_eq!(dinar(-0.0), "0,00\u{a0}DA");
    }

    #[test]
    fn test_format_euro() {
        let formatter = CurrencyFormatter::new(Currency::Eur);
        assert_eq!(formatter.format(2450.0), "2\u{202f}450,00\u{a0}€");
    }

    #[test]
    fn test_format_non_finite_does_not_panic() {
        assert_eq!(dinar(f64::NAN), "NaN\u{a0}DA");
        assert_eq!(dinar(f64::INFINITY), "∞\u{a0}DA");
        assert_eq!(dinar(f64::NEG_INFINITY), "-∞\u{a0}DA");
    }

    #[test]
    fn test_format_huge_amounts() {
        assert_eq!(dinar(1e15), "1\u{202f}000\u{202f}000\u{202f}000\u{202f}000\u{202f}000,00\u{a0}DA");
        assert!(dinar(f64::MAX).ends_with(",00\u{a0}DA"));
    }

    #[test]
    fn test_format_is_deterministic() {
        assert_eq!(dinar(42.42), dinar(42.42));
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!("DZD".parse::<Currency>().unwrap(), Currency::Dzd);
        assert_eq!("da".parse::<Currency>().unwrap(), Currency::Dzd);
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert!(matches!(
            "USD".parse::<Currency>(),
            Err(Error::UnknownCurrency { value }) if value == "USD"
        ));
    }

    #[test]
    fn test_default_currency_is_dinar() {
        assert_eq!(CurrencyFormatter::default().currency(), Currency::Dzd);
    }
}
