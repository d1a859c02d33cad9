//! Fixed-point conversion engine
//!
//! Amounts move between currencies through the base currency using the
//! integer rate pairs from the currency table. All division truncates and
//! nothing is ever rounded, so a round trip through the base is lossy:
//! `from_base(c, to_base(c, a))` is at most `a`, never above it.
//!
//! Amounts are non-negative minor units (cents for two-digit currencies,
//! whole coins for whole-unit currencies); on that domain truncating and
//! floor division agree.

use core::fmt;

use crate::currency::Currency;

/// Divisor splitting a minor-unit amount into integer and fractional parts
const CENTS_PER_UNIT: i64 = 100;

/// A converted amount ready for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayAmount {
    /// Bare integer, for whole-unit currencies
    Whole(i64),
    /// `int_part.frac`, fraction always rendered with two digits
    Decimal {
        /// Whole units
        int_part: i64,
        /// Hundredths, 0-99
        frac: u8,
    },
}

impl DisplayAmount {
    /// Split minor units into integer and fractional parts
    pub fn from_cents(cents: i64) -> Self {
        DisplayAmount::Decimal {
            int_part: cents / CENTS_PER_UNIT,
            frac: (cents % CENTS_PER_UNIT) as u8,
        }
    }
}

impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayAmount::Whole(value) => write!(f, "{}", value),
            DisplayAmount::Decimal { int_part, frac } => write!(f, "{}.{:02}", int_part, frac),
        }
    }
}

/// Convert an amount in `currency` minor units to base minor units
pub fn to_base(currency: Currency, amount_minor: i64) -> i64 {
    let info = currency.info();
    amount_minor * info.to_base_num / info.to_base_den
}

/// Convert base minor units to an amount in `currency`
///
/// Whole-unit currencies take the quotient directly and never show zero
/// for a positive base amount; everything else splits into hundredths.
pub fn from_base(currency: Currency, base_minor: i64) -> DisplayAmount {
    let info = currency.info();
    let quotient = base_minor * info.to_base_den / info.to_base_num;

    if currency.is_whole_units() {
        if quotient == 0 && base_minor > 0 {
            DisplayAmount::Whole(1)
        } else {
            DisplayAmount::Whole(quotient)
        }
    } else {
        DisplayAmount::from_cents(quotient)
    }
}

/// Display form of the amount the user entered
///
/// The entry is always split by 100; a whole-unit source shows only the
/// integer part of that split.
pub fn source_amount(currency: Currency, amount_minor: i64) -> DisplayAmount {
    match DisplayAmount::from_cents(amount_minor) {
        DisplayAmount::Decimal { int_part, .. } if currency.is_whole_units() => {
            DisplayAmount::Whole(int_part)
        }
        amount => amount,
    }
}

/// A completed conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Conversion {
    /// Source currency
    pub from: Currency,
    /// Target currency
    pub to: Currency,
    /// Entered amount in source minor units
    pub amount_minor: i64,
    /// Intermediate value in base minor units
    pub base_minor: i64,
    /// Converted amount in the target currency
    pub result: DisplayAmount,
}

impl Conversion {
    /// Run `amount_minor` of `from` through the base into `to`
    pub fn run(from: Currency, to: Currency, amount_minor: i64) -> Self {
        let base_minor = to_base(from, amount_minor);
        Self {
            from,
            to,
            amount_minor,
            base_minor,
            result: from_base(to, base_minor),
        }
    }

    /// The entered amount as shown on the result screen
    pub fn source(&self) -> DisplayAmount {
        source_amount(self.from, self.amount_minor)
    }
}
