//! Wizard state machine
//!
//! The wizard cycles through four phases. Every change is a function of
//! the current state and the events sampled in one tick.

use super::events::{AxisEvent, InputEvents};
use crate::amount::{AmountDigits, Cursor};
use crate::conversion::Conversion;
use crate::currency::Currency;
use crate::display::{views, Screen};

/// Wizard phases, strictly forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WizardPhase {
    /// Choosing the currency to convert from
    #[default]
    SelectSource,
    /// Choosing the currency to convert to
    SelectTarget,
    /// Dialling in the amount digit by digit
    EnterAmount,
    /// Showing the converted amount
    ShowResult(Conversion),
}

impl WizardPhase {
    /// True for phases where the X axis has an effect
    pub fn accepts_x(&self) -> bool {
        !matches!(self, WizardPhase::ShowResult(_))
    }

    /// True for phases where the Y axis has an effect
    pub fn accepts_y(&self) -> bool {
        matches!(self, WizardPhase::EnterAmount)
    }
}

/// Default source currency
const DEFAULT_FROM: Currency = Currency::Brl;

/// Default target currency
const DEFAULT_TO: Currency = Currency::Usd;

/// Select/select/enter/show wizard
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wizard {
    phase: WizardPhase,
    from: Currency,
    to: Currency,
    digits: AmountDigits,
    cursor: Cursor,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Wizard at source selection with default currencies
    pub const fn new() -> Self {
        Self {
            phase: WizardPhase::SelectSource,
            from: DEFAULT_FROM,
            to: DEFAULT_TO,
            digits: AmountDigits::new(),
            cursor: Cursor::new(),
        }
    }

    /// Current phase
    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// Selected source currency
    pub fn from(&self) -> Currency {
        self.from
    }

    /// Selected target currency
    pub fn to(&self) -> Currency {
        self.to
    }

    /// Entered digits
    pub fn digits(&self) -> &AmountDigits {
        &self.digits
    }

    /// Cursor over the entered digits
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The conversion on display, if any
    pub fn conversion(&self) -> Option<&Conversion> {
        match &self.phase {
            WizardPhase::ShowResult(conversion) => Some(conversion),
            _ => None,
        }
    }

    /// Back to source selection with defaults
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// The part of `events` the current phase acts on
    ///
    /// Axis events the phase ignores are dropped. A press is always kept.
    pub fn accepted(&self, events: InputEvents) -> InputEvents {
        InputEvents {
            x: if self.phase.accepts_x() { events.x } else { AxisEvent::None },
            y: if self.phase.accepts_y() { events.y } else { AxisEvent::None },
            button: events.button,
        }
    }

    /// Apply one tick's events
    ///
    /// X is applied first, then Y, then the button. Returns true when the
    /// screen must be redrawn.
    pub fn handle(&mut self, events: InputEvents) -> bool {
        let events = self.accepted(events);
        let mut redraw = false;

        if events.x.is_move() {
            self.handle_x(events.x);
            redraw = true;
        }
        if events.y.is_move() {
            self.handle_y(events.y);
            redraw = true;
        }

        if events.button.is_pressed() {
            self.press();
            redraw = true;
        }

        redraw
    }

    /// Compose the screen for the current state
    pub fn screen(&self) -> Screen {
        match &self.phase {
            WizardPhase::SelectSource => views::selection_screen(views::FROM_PREFIX, self.from),
            WizardPhase::SelectTarget => views::selection_screen(views::TO_PREFIX, self.to),
            WizardPhase::EnterAmount => views::entry_screen(self.from, &self.digits, self.cursor),
            WizardPhase::ShowResult(conversion) => views::result_screen(conversion),
        }
    }

    fn handle_x(&mut self, event: AxisEvent) {
        let positive = event == AxisEvent::MovedPositive;
        match self.phase {
            WizardPhase::SelectSource => {
                self.from = if positive { self.from.next() } else { self.from.prev() };
            }
            WizardPhase::SelectTarget => {
                self.to = if positive { self.to.next() } else { self.to.prev() };
            }
            WizardPhase::EnterAmount => {
                if positive {
                    self.cursor.move_right();
                } else {
                    self.cursor.move_left();
                }
            }
            WizardPhase::ShowResult(_) => {}
        }
    }

    // Stick up reads as negative on the Y axis and raises the digit.
    fn handle_y(&mut self, event: AxisEvent) {
        let position = self.cursor.position();
        match event {
            AxisEvent::MovedPositive => self.digits.decrement(position),
            AxisEvent::MovedNegative => self.digits.increment(position),
            AxisEvent::None => {}
        }
    }

    fn press(&mut self) {
        self.phase = match self.phase {
            WizardPhase::SelectSource => {
                if self.to == self.from {
                    self.to = self.from.alternate();
                }
                WizardPhase::SelectTarget
            }
            WizardPhase::SelectTarget => {
                self.digits.reset();
                self.cursor.reset();
                WizardPhase::EnterAmount
            }
            WizardPhase::EnterAmount => WizardPhase::ShowResult(Conversion::run(
                self.from,
                self.to,
                self.digits.to_minor_units(),
            )),
            WizardPhase::ShowResult(_) => {
                self.restart();
                return;
            }
        };
    }
}
