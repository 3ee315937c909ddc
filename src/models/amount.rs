//! Amount type for expense values
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. The persisted form is a fixed-point decimal with two fraction
//! digits, which `Display` produces and `parse` accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create an Amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse an amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5"
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol if present
        let s = s.strip_prefix('$').unwrap_or(s);

        // Parse based on format. The sign was stripped above, so units and
        // fraction are non-negative; values whose cents would not fit in i64
        // are rejected rather than wrapped.
        let cents = if s.contains('.') {
            // Decimal format: "10.50"
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(AmountParseError::InvalidFormat(s.to_string()));
            }

            let units: i64 = parts[0]
                .parse()
                .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fraction to 2 digits; only plain digits are
            // allowed (no embedded sign)
            let frac_str = parts[1];
            if !frac_str.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AmountParseError::InvalidFormat(s.to_string()));
            }
            let frac: i64 = match frac_str.len() {
                0 => 0,
                1 => {
                    frac_str
                        .parse::<i64>()
                        .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac_str
                    .get(..2)
                    .ok_or_else(|| AmountParseError::InvalidFormat(s.to_string()))?
                    .parse()
                    .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?,
            };

            units
                .checked_mul(100)
                .and_then(|c| c.checked_add(frac))
                .ok_or_else(|| AmountParseError::InvalidFormat(s.to_string()))?
        } else {
            // Integer format - whole units
            s.parse::<i64>()
                .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?
                .checked_mul(100)
                .ok_or_else(|| AmountParseError::InvalidFormat(s.to_string()))?
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parse an amount leniently, coercing unparsable input to zero
    ///
    /// Returns the parsed amount and a flag indicating whether the input was
    /// coerced. Callers should surface the flag (e.g. a warning) so that
    /// mistyped amounts are not silently recorded as zero.
    pub fn parse_lenient(s: &str) -> (Self, bool) {
        match Self::parse(s) {
            Ok(amount) => (amount, false),
            Err(_) => (Self::zero(), true),
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    /// Fixed-point decimal with exactly two fraction digits and no symbol;
    /// this is the persisted representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

// Ledger totals saturate at the i64 cents range instead of wrapping

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
