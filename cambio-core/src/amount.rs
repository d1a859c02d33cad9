//! Amount entry
//!
//! The user dials in a five-digit amount one digit at a time. Digits and
//! the cursor both clamp at their bounds instead of wrapping.

/// Number of digits in an entered amount
pub const AMOUNT_DIGITS: usize = 5;

/// Digits after the decimal point for two-digit currencies
pub const FRACTION_DIGITS: usize = 2;

/// Index of the first fractional digit
pub const DECIMAL_POINT_INDEX: usize = AMOUNT_DIGITS - FRACTION_DIGITS;

/// Largest cursor position
pub const CURSOR_MAX: u8 = (AMOUNT_DIGITS - 1) as u8;

/// Five decimal digits, most significant first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AmountDigits {
    digits: [u8; AMOUNT_DIGITS],
}

impl AmountDigits {
    /// All zeros
    pub const fn new() -> Self {
        Self {
            digits: [0; AMOUNT_DIGITS],
        }
    }

    /// Build from explicit digits, clamping each to 0-9
    pub fn from_digits(digits: [u8; AMOUNT_DIGITS]) -> Self {
        Self {
            digits: digits.map(|d| d.min(9)),
        }
    }

    /// Digits, most significant first
    pub fn digits(&self) -> &[u8; AMOUNT_DIGITS] {
        &self.digits
    }

    /// Digit at `position` (positions past the end read as zero)
    pub fn digit(&self, position: u8) -> u8 {
        self.digits.get(position as usize).copied().unwrap_or(0)
    }

    /// Raise the digit at `position`, stopping at 9
    pub fn increment(&mut self, position: u8) {
        if let Some(d) = self.digits.get_mut(position as usize) {
            if *d < 9 {
                *d += 1;
            }
        }
    }

    /// Lower the digit at `position`, stopping at 0
    pub fn decrement(&mut self, position: u8) {
        if let Some(d) = self.digits.get_mut(position as usize) {
            *d = d.saturating_sub(1);
        }
    }

    /// Reset all digits to zero
    pub fn reset(&mut self) {
        self.digits = [0; AMOUNT_DIGITS];
    }

    /// The digits read as one integer in minor units
    pub fn to_minor_units(&self) -> i64 {
        self.digits
            .iter()
            .fold(0i64, |acc, &d| acc * 10 + d as i64)
    }
}

/// Editable digit position, 0 to [`CURSOR_MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor(u8);

impl Cursor {
    /// Cursor on the most significant digit
    pub const fn new() -> Self {
        Self(0)
    }

    /// Current digit index
    pub fn position(&self) -> u8 {
        self.0
    }

    /// Move one digit right, clamped
    pub fn move_right(&mut self) {
        if self.0 < CURSOR_MAX {
            self.0 += 1;
        }
    }

    /// Move one digit left, clamped
    pub fn move_left(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Back to the most significant digit
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Screen column under the cursor's digit
    ///
    /// With a decimal point rendered, digits at or past the point sit one
    /// column further right.
    pub fn display_column(&self, whole_units: bool) -> usize {
        let pos = self.0 as usize;
        if whole_units || pos < DECIMAL_POINT_INDEX {
            pos
        } else {
            pos + 1
        }
    }
}
