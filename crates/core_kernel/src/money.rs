//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal, plus the lenient amount parser used when reading
//! figures such as `$12,000` out of claim documents.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CHF,
    INR,
    AUD,
    CAD,
    SGD,
    HKD,
}

impl Currency {
    /// All supported currencies
    pub const ALL: [Currency; 10] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CHF,
        Currency::INR,
        Currency::AUD,
        Currency::CAD,
        Currency::SGD,
        Currency::HKD,
    ];

    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CHF => "CHF",
            Currency::INR => "₹",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
            Currency::SGD => "S$",
            Currency::HKD => "HK$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::INR => "INR",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::SGD => "SGD",
            Currency::HKD => "HKD",
        }
    }

    /// Detects the currency named in a piece of free text.
    ///
    /// ISO codes take precedence over symbols. Prefixed dollar symbols
    /// (`HK$`, `A$`, ...) are checked before the bare `$`.
    pub fn detect(text: &str) -> Option<Currency> {
        if let Some(caps) = CURRENCY_CODE.captures(text) {
            let code = caps[1].to_ascii_uppercase();
            return Currency::ALL.into_iter().find(|c| c.code() == code);
        }

        const SYMBOLS: [(&str, Currency); 8] = [
            ("HK$", Currency::HKD),
            ("A$", Currency::AUD),
            ("C$", Currency::CAD),
            ("S$", Currency::SGD),
            ("€", Currency::EUR),
            ("£", Currency::GBP),
            ("¥", Currency::JPY),
            ("₹", Currency::INR),
        ];
        SYMBOLS
            .iter()
            .find(|(symbol, _)| text.contains(symbol))
            .map(|(_, currency)| *currency)
            .or_else(|| text.contains('$').then_some(Currency::USD))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

static CURRENCY_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(USD|EUR|GBP|JPY|CHF|INR|AUD|CAD|SGD|HKD)\b").expect("valid currency regex")
});

static AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9][0-9,]*(?:\.[0-9]+)?").expect("valid amount regex"));

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A monetary amount with associated currency
///
/// Amounts are stored with 4 decimal places internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Parses an amount out of free text such as `"$12,000"` or `"approx. 4500 EUR"`.
    ///
    /// The first digit run is taken as the amount, with thousands separators
    /// removed. The currency is detected from a code or symbol anywhere in the
    /// text and defaults to USD.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the text holds no digits.
    pub fn parse_amount(text: &str) -> Result<Money, MoneyError> {
        let raw = AMOUNT
            .find(text)
            .ok_or_else(|| MoneyError::InvalidAmount(text.trim().to_string()))?;

        let digits = raw.as_str().replace(',', "");
        let amount = Decimal::from_str(&digits)
            .map_err(|e| MoneyError::InvalidAmount(format!("{}: {}", raw.as_str(), e)))?;

        let currency = Currency::detect(text).unwrap_or(Currency::USD);
        Ok(Self::new(amount, currency))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly below `threshold`
    pub fn is_below(&self, threshold: Decimal) -> bool {
        self.amount < threshold
    }

    /// Returns true if this amount is more than `ratio` times `other`.
    ///
    /// A product too large to represent is above any amount, so it never
    /// counts as exceeded.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` when the currencies differ.
    pub fn exceeds_ratio_of(&self, other: &Money, ratio: Decimal) -> Result<bool, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(other
            .amount
            .checked_mul(ratio)
            .is_some_and(|limit| self.amount > limit))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places() as usize;
        let fixed = format!("{:.dp$}", self.amount.abs(), dp = dp);
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.amount.is_sign_negative() && !self.amount.is_zero() { "-" } else { "" };
        match fraction {
            Some(fraction) => write!(f, "{}{}{}.{}", sign, self.currency.symbol(), grouped, fraction),
            None => write!(f, "{}{}{}", sign, self.currency.symbol(), grouped),
        }
    }
}
