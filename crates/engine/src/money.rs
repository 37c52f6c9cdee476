use std::{fmt, str::FromStr};

use crate::EngineError;

/// Signed US-dollar amount represented as **integer cents**.
///
/// The Birdie API speaks plain JSON numbers (a server-side decimal); this
/// type is the client's rounding point for display and the parser for user
/// input.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(123_450);
/// assert_eq!(amount.cents(), 123450);
/// assert_eq!(amount.to_string(), "$1,234.50");
/// assert_eq!(Money::from_major(3.8867).to_string(), "$3.89");
/// ```
///
/// Parsing from user input ignores commas and spaces used as grouping and
/// rejects more than 2 decimals:
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("12".parse::<Money>().unwrap().cents(), 1200);
/// assert_eq!("1,234.5".parse::<Money>().unwrap().cents(), 123450);
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Rounds a server amount (major units) to the nearest cent, halves away
    /// from zero.
    #[must_use]
    pub fn from_major(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns the amount in major units, as sent to the server.
    #[must_use]
    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let dollars = group_thousands(abs / 100);
        let cents = abs % 100;
        write!(f, "{sign}${dollars}.{cents:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts an optional leading `+`/`-` and `$`; `.` is the decimal
    /// separator, while `,` and spaces are dropped as digit grouping.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount(format!("\"{}\" is not a number", s.trim()));
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let compact: String = s.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = compact.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = compact.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, compact.as_str())
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        if rest.is_empty() {
            return Err(empty());
        }

        let (dollars_str, cents_str) = match rest.split_once('.') {
            Some((dollars, cents)) => (dollars, Some(cents)),
            None => (rest, None),
        };

        // ".5" is fine, "." alone is not.
        if dollars_str.is_empty() && cents_str.is_none_or(str::is_empty) {
            return Err(invalid());
        }
        if !dollars_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let dollars: i64 = if dollars_str.is_empty() {
            0
        } else {
            dollars_str.parse().map_err(|_| overflow())?
        };

        let cents: i64 = match cents_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(EngineError::InvalidAmount("too many decimals".to_string())),
                }
            }
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -total } else { total }))
    }
}
