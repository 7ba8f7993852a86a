//! Money value object (cents-based to avoid floating point errors).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Represents a price in cents to avoid floating-point arithmetic errors
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(u64);

/// Error parsing a displayed price into [`Money`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// The text is not a decimal number
    #[error("not a valid price: {text:?}")]
    Invalid {
        /// The offending input
        text: String,
    },
    /// Negative prices are not representable
    #[error("price cannot be negative: {text:?}")]
    Negative {
        /// The offending input
        text: String,
    },
    /// The amount does not fit in 64 bits of cents
    #[error("price out of range: {text:?}")]
    Overflow {
        /// The offending input
        text: String,
    },
}

impl Money {
    /// Zero cents
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Parses a displayed decimal price into cents.
    ///
    /// This is the entry point for price fields: `"12.50"` is 1250 cents
    /// and `"12.345"` rounds half-up to 1235. Blank input is zero cents,
    /// matching how an untouched price field submits. Parsing the text
    /// directly avoids the `f64` trap where `12.345 * 100.0` lands just
    /// under 1234.5 and rounds the wrong way.
    ///
    /// # Errors
    ///
    /// Returns [`ParseMoneyError`] when the text is not a non-negative
    /// decimal number or does not fit in 64 bits of cents.
    pub fn parse(text: &str) -> Result<Self, ParseMoneyError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }

        let invalid = || ParseMoneyError::Invalid {
            text: text.to_string(),
        };

        if let Some(rest) = trimmed.strip_prefix('-') {
            // "-0" and friends are still zero
            if rest.chars().all(|c| c == '0' || c == '.') && !rest.is_empty() {
                return Ok(Self::ZERO);
            }
            return Err(ParseMoneyError::Negative {
                text: text.to_string(),
            });
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let dollars: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseMoneyError::Overflow {
                text: text.to_string(),
            })?
        };

        let mut digits = fraction.chars();
        let tens = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0);
        let units = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0);
        let round_up = digits
            .next()
            .and_then(|c| c.to_digit(10))
            .is_some_and(|d| d >= 5);

        let sub_dollar = u64::from(tens * 10 + units) + u64::from(round_up);

        dollars
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(sub_dollar))
            .map(Self)
            .ok_or(ParseMoneyError::Overflow {
                text: text.to_string(),
            })
    }

    /// Returns the amount in cents
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
