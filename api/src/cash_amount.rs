//! Provides a safe, self-contained type for representing cash amounts.

use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;

use num_traits::CheckedAdd;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::currency::Currency;

/// An error that can occur when parsing a string into a `CashAmount`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCashAmountError {
    /// The string is not in a valid numeric format (e.g., "abc", "1.2.3").
    #[error("invalid cash amount format")]
    InvalidFormat,
    /// The string has more decimal places than the currency supports (e.g., "1.234" USD).
    #[error("too many decimal places for the currency")]
    TooManyDecimals,
}

/// A signed monetary value in a specific currency.
///
/// Stored as a signed 64-bit integer in the currency's smallest unit (e.g.,
/// cents for USD). Negative values are outflows or losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CashAmount {
    minor: i64,
    currency: Currency,
}

impl CashAmount {
    // --- Getters ---

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the raw amount in the currency's smallest unit (e.g., cents).
    pub fn as_minor_units(&self) -> i64 {
        self.minor
    }

    pub fn is_zero(&self) -> bool {
        self.minor == 0
    }

    pub fn is_positive(&self) -> bool {
        self.minor > 0
    }

    pub fn is_negative(&self) -> bool {
        self.minor < 0
    }

    // --- Constructors ---

    pub fn zero(currency: Currency) -> Self {
        Self { minor: 0, currency }
    }

    /// Creates a new `CashAmount` directly from its smallest unit.
    ///
    /// # Example
    /// ```
    /// use api::cash_amount::CashAmount;
    /// use api::currency::Currency;
    ///
    /// let amount = CashAmount::new_from_minor(12345, Currency::USD);
    /// assert_eq!(amount.to_string(), "123.45");
    /// ```
    pub fn new_from_minor(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// Creates a new `CashAmount` by parsing a decimal string such as "-12.50".
    ///
    /// Fails if the string is not a valid number or has more decimal places
    /// than the currency allows.
    pub fn new_from_str(s: &str, currency: Currency) -> Result<Self, ParseCashAmountError> {
        let decimals = currency.decimals() as u32;

        let (is_negative, s) = match s.trim().strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s.trim()),
        };

        let mut parts = s.split('.');
        let major_str = parts.next().unwrap_or("");
        let minor_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (major_str.is_empty() && minor_str.is_empty()) {
            return Err(ParseCashAmountError::InvalidFormat);
        }
        if !major_str.chars().chain(minor_str.chars()).all(|c| c.is_ascii_digit()) {
            return Err(ParseCashAmountError::InvalidFormat);
        }
        if minor_str.len() > decimals as usize {
            return Err(ParseCashAmountError::TooManyDecimals);
        }

        let major_units = if major_str.is_empty() {
            0
        } else {
            major_str
                .parse::<i64>()
                .map_err(|_| ParseCashAmountError::InvalidFormat)?
        };
        let minor_units = if minor_str.is_empty() {
            0
        } else {
            minor_str
                .parse::<i64>()
                .map_err(|_| ParseCashAmountError::InvalidFormat)?
        };

        let scaled_minor_units = minor_units
            .checked_mul(10_i64.pow(decimals - minor_str.len() as u32))
            .ok_or(ParseCashAmountError::InvalidFormat)?;

        let total = major_units
            .checked_mul(10_i64.pow(decimals))
            .and_then(|major| major.checked_add(scaled_minor_units))
            .ok_or(ParseCashAmountError::InvalidFormat)?;

        Ok(Self::new_from_minor(
            if is_negative { -total } else { total },
            currency,
        ))
    }

    // --- Display Methods ---

    /// Formats the amount with its currency symbol (e.g., "$25.34", "-$3.10").
    pub fn to_string_with_symbol(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, self.currency.symbol(), self.abs_string())
    }

    /// Formats the amount with its currency code (e.g., "25.34 USD").
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, self.currency.code())
    }

    /// Like `Display`, but with an explicit leading `+` on positive values.
    pub fn to_string_signed(&self) -> String {
        if self.is_positive() {
            format!("+{}", self)
        } else {
            self.to_string()
        }
    }

    fn abs_string(&self) -> String {
        let decimals = self.currency.decimals() as u32;
        let abs = self.minor.unsigned_abs();
        if decimals == 0 {
            return abs.to_string();
        }
        let divisor = 10_u64.pow(decimals);
        format!(
            "{}.{:0width$}",
            abs / divisor,
            abs % divisor,
            width = decimals as usize
        )
    }
}

/// Formats as a plain numeric string (e.g., "-25.34").
impl fmt::Display for CashAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}", sign, self.abs_string())
    }
}

/// Panics if currencies do not match.
impl Add for CashAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.currency != rhs.currency {
            panic!(
                "Cannot add amounts of different currencies: {:?} and {:?}",
                self.currency, rhs.currency
            );
        }
        Self {
            minor: self.minor + rhs.minor,
            currency: self.currency,
        }
    }
}

/// Panics if currencies do not match.
impl AddAssign for CashAmount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Returns `None` if currencies mismatch or if addition overflows.
impl CheckedAdd for CashAmount {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        if self.currency != v.currency {
            return None;
        }
        self.minor.checked_add(v.minor).map(|minor| Self {
            minor,
            currency: self.currency,
        })
    }
}
