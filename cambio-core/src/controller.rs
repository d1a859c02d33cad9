//! Controller tick loop
//!
//! The controller owns the display, the input source and the wizard, and
//! advances them on an explicit millisecond clock. The caller supplies
//! `now_ms` on every tick; nothing here blocks or sleeps.
//!
//! ```text
//!  Boot ──render splash──► Splash ──deadline──► AwaitStart ──press──► Running
//! ```

use crate::config::TimingConfig;
use crate::display::{views, Screen};
use crate::input::SettleGate;
use crate::state::{InputEvents, Wizard, WizardPhase};
use crate::traits::{DisplayDriver, DisplayExt, InputSource};

/// Boot stage ahead of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// Nothing drawn yet
    Boot,
    /// Splash banner up until the deadline
    Splash {
        /// Tick time the banner comes down
        until_ms: u64,
    },
    /// Start screen up, waiting for a button press
    AwaitStart,
    /// Wizard active
    Running,
}

/// Fault reported by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError<D, I> {
    /// Rendering failed
    Display(D),
    /// Sampling failed
    Input(I),
}

/// Ties input, wizard and display together
pub struct Controller<D: DisplayDriver, S: InputSource> {
    display: D,
    input: S,
    wizard: Wizard,
    gate: SettleGate,
    stage: Stage,
    timing: TimingConfig,
    dirty: bool,
}

impl<D: DisplayDriver, S: InputSource> Controller<D, S> {
    /// Create a controller in the boot stage
    pub fn new(display: D, input: S, timing: TimingConfig) -> Self {
        Self {
            display,
            input,
            wizard: Wizard::new(),
            gate: SettleGate::new(),
            stage: Stage::Boot,
            timing,
            dirty: false,
        }
    }

    /// Current boot stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The wizard
    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// The display driver
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The input source
    pub fn input(&self) -> &S {
        &self.input
    }

    /// True while a redraw is pending after a failed render
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Screen for the current stage
    pub fn screen(&self) -> Screen {
        match self.stage {
            Stage::Boot | Stage::Splash { .. } => views::splash_screen(),
            Stage::AwaitStart => views::start_screen(),
            Stage::Running => self.wizard.screen(),
        }
    }

    /// Advance one step
    ///
    /// Returns the new wizard phase when this tick moved the wizard (or
    /// started it).
    pub fn tick(
        &mut self,
        now_ms: u64,
    ) -> Result<Option<WizardPhase>, ControllerError<D::Error, S::Error>> {
        if self.dirty {
            self.redraw()?;
        }

        match self.stage {
            Stage::Boot => {
                self.display
                    .render(&views::splash_screen())
                    .map_err(ControllerError::Display)?;
                self.stage = Stage::Splash {
                    until_ms: now_ms.saturating_add(self.timing.splash_ms as u64),
                };
                Ok(None)
            }
            Stage::Splash { until_ms } => {
                if now_ms < until_ms {
                    return Ok(None);
                }
                self.display
                    .render(&views::start_screen())
                    .map_err(ControllerError::Display)?;
                self.stage = Stage::AwaitStart;
                Ok(None)
            }
            Stage::AwaitStart => {
                let Some(events) = self.poll(now_ms)? else {
                    return Ok(None);
                };
                if !events.button.is_pressed() {
                    return Ok(None);
                }
                self.gate.hold(now_ms, self.timing.button_settle_ms);
                self.stage = Stage::Running;
                self.mark_dirty()?;
                Ok(Some(self.wizard.phase()))
            }
            Stage::Running => {
                let Some(events) = self.poll(now_ms)? else {
                    return Ok(None);
                };
                // Only events the wizard acts on close the gate
                let events = self.wizard.accepted(events);
                if events.is_empty() {
                    return Ok(None);
                }
                self.settle(now_ms, events);

                let before = self.wizard.phase();
                if self.wizard.handle(events) {
                    self.mark_dirty()?;
                }
                let after = self.wizard.phase();
                Ok((after != before).then_some(after))
            }
        }
    }

    /// Sample once the gate is open; `None` when nothing happened
    fn poll(
        &mut self,
        now_ms: u64,
    ) -> Result<Option<InputEvents>, ControllerError<D::Error, S::Error>> {
        if !self.gate.is_open(now_ms) {
            return Ok(None);
        }
        let events = self.input.sample().map_err(ControllerError::Input)?;
        Ok((!events.is_empty()).then_some(events))
    }

    fn settle(&mut self, now_ms: u64, events: InputEvents) {
        if events.has_axis_move() {
            self.gate.hold(now_ms, self.timing.axis_settle_ms);
        }
        if events.button.is_pressed() {
            self.gate.hold(now_ms, self.timing.button_settle_ms);
        }
    }

    fn mark_dirty(&mut self) -> Result<(), ControllerError<D::Error, S::Error>> {
        self.dirty = true;
        self.redraw()
    }

    fn redraw(&mut self) -> Result<(), ControllerError<D::Error, S::Error>> {
        let screen = self.screen();
        self.display
            .render(&screen)
            .map_err(ControllerError::Display)?;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::Conversion;
    use crate::currency::Currency;
    use crate::state::AxisEvent;
    use crate::traits::display::mock::RecordingDisplay;
    use std::collections::VecDeque;

    /// Input source replaying a fixed script, then reporting no events
    #[derive(Default)]
    struct ScriptedInput {
        script: VecDeque<Result<InputEvents, ()>>,
        samples: usize,
    }

    impl ScriptedInput {
        fn new(script: &[Result<InputEvents, ()>]) -> Self {
            Self {
                script: script.iter().copied().collect(),
                samples: 0,
            }
        }
    }

    impl InputSource for ScriptedInput {
        type Error = ();

        fn sample(&mut self) -> Result<InputEvents, ()> {
            self.samples += 1;
            self.script.pop_front().unwrap_or(Ok(InputEvents::NONE))
        }
    }

    type TestController = Controller<RecordingDisplay, ScriptedInput>;

    fn controller(script: &[Result<InputEvents, ()>]) -> TestController {
        Controller::new(
            RecordingDisplay::default(),
            ScriptedInput::new(script),
            TimingConfig::DEFAULT,
        )
    }

    /// Run the boot stages through to the wizard
    fn boot(c: &mut TestController) -> u64 {
        c.tick(0).unwrap();
        c.tick(3000).unwrap();
        assert_eq!(c.tick(3010).unwrap(), Some(WizardPhase::SelectSource));
        3010
    }

    #[test]
    fn test_boot_sequence() {
        let mut c = controller(&[Ok(InputEvents::x(AxisEvent::MovedPositive)), Ok(InputEvents::PRESS)]);

        assert_eq!(c.tick(0), Ok(None));
        assert_eq!(c.stage(), Stage::Splash { until_ms: 3000 });
        assert_eq!(c.display().rows()[0], "CAMBIO LIVE");

        assert_eq!(c.tick(2999), Ok(None));
        assert_eq!(c.input().samples, 0);

        assert_eq!(c.tick(3000), Ok(None));
        assert_eq!(c.stage(), Stage::AwaitStart);
        assert_eq!(c.display().rows()[1], "Press button...");

        // Stick movement does not start the wizard
        assert_eq!(c.tick(3010), Ok(None));
        assert_eq!(c.stage(), Stage::AwaitStart);

        assert_eq!(c.tick(3020), Ok(Some(WizardPhase::SelectSource)));
        assert_eq!(c.stage(), Stage::Running);
        assert_eq!(c.display().rows()[0], "From: BRL");
        assert_eq!(c.wizard().from(), Currency::Brl);
    }

    #[test]
    fn test_settle_gate_holds_sampling() {
        let mut c = controller(&[
            Ok(InputEvents::PRESS),
            Ok(InputEvents::x(AxisEvent::MovedPositive)),
            Ok(InputEvents::x(AxisEvent::MovedPositive)),
        ]);
        let t = boot(&mut c);
        let sampled = c.input().samples;

        // Button hold-off is 300 ms
        assert_eq!(c.tick(t + 299), Ok(None));
        assert_eq!(c.input().samples, sampled);

        assert_eq!(c.tick(t + 300), Ok(None));
        assert_eq!(c.wizard().from(), Currency::Usd);
        assert_eq!(c.display().rows()[0], "From: USD");

        // Axis hold-off is 200 ms
        assert_eq!(c.tick(t + 499), Ok(None));
        assert_eq!(c.wizard().from(), Currency::Usd);
        assert_eq!(c.tick(t + 500), Ok(None));
        assert_eq!(c.wizard().from(), Currency::Eur);
    }

    #[test]
    fn test_ignored_axis_does_not_hold_gate() {
        let mut c = controller(&[
            Ok(InputEvents::PRESS),
            Ok(InputEvents::y(AxisEvent::MovedNegative)),
            Ok(InputEvents::x(AxisEvent::MovedPositive)),
        ]);
        let t = boot(&mut c);
        let rendered = c.display().ops.len();

        // Y does nothing during selection
        assert_eq!(c.tick(t + 300), Ok(None));
        assert_eq!(c.wizard().from(), Currency::Brl);
        assert_eq!(c.display().ops.len(), rendered);

        // Next poll interval, not the 200 ms axis hold-off
        assert_eq!(c.tick(t + 310), Ok(None));
        assert_eq!(c.wizard().from(), Currency::Usd);
    }

    #[test]
    fn test_axis_on_result_does_not_hold_gate() {
        let mut c = controller(&[
            Ok(InputEvents::PRESS),
            Ok(InputEvents::PRESS),
            Ok(InputEvents::PRESS),
            Ok(InputEvents::PRESS),
            Ok(InputEvents::x(AxisEvent::MovedPositive)),
            Ok(InputEvents::PRESS),
        ]);
        let mut t = boot(&mut c);
        for _ in 0..3 {
            t += 300;
            c.tick(t).unwrap();
        }
        assert!(c.wizard().conversion().is_some());

        t += 300;
        assert_eq!(c.tick(t), Ok(None));
        assert!(c.wizard().conversion().is_some());
        assert_eq!(c.tick(t + 10), Ok(Some(WizardPhase::SelectSource)));
    }

    #[test]
    fn test_longer_settle_wins() {
        let both = InputEvents {
            x: AxisEvent::MovedPositive,
            ..InputEvents::PRESS
        };
        let mut c = controller(&[Ok(InputEvents::PRESS), Ok(both)]);
        let t = boot(&mut c);

        assert_eq!(c.tick(t + 300), Ok(Some(WizardPhase::SelectTarget)));
        let sampled = c.input().samples;
        c.tick(t + 300 + 299).unwrap();
        assert_eq!(c.input().samples, sampled);
        c.tick(t + 600).unwrap();
        assert_eq!(c.input().samples, sampled + 1);
    }

    #[test]
    fn test_full_cycle_reports_phases() {
        let mut c = controller(&[
            Ok(InputEvents::PRESS),
            Ok(InputEvents::PRESS),
            Ok(InputEvents::PRESS),
            Ok(InputEvents::PRESS),
            Ok(InputEvents::PRESS),
        ]);
        let mut t = boot(&mut c);
        let mut phases = std::vec::Vec::new();
        for _ in 0..4 {
            t += 300;
            if let Some(phase) = c.tick(t).unwrap() {
                phases.push(phase);
            }
        }
        assert_eq!(
            phases,
            [
                WizardPhase::SelectTarget,
                WizardPhase::EnterAmount,
                WizardPhase::ShowResult(Conversion::run(Currency::Brl, Currency::Usd, 0)),
                WizardPhase::SelectSource,
            ]
        );
    }

    #[test]
    fn test_result_shown() {
        let mut c = controller(&[
            Ok(InputEvents::PRESS),
            Ok(InputEvents::PRESS),
            Ok(InputEvents::PRESS),
            Ok(InputEvents::PRESS),
        ]);
        let mut t = boot(&mut c);
        for _ in 0..3 {
            t += 300;
            c.tick(t).unwrap();
        }
        assert!(matches!(c.wizard().phase(), WizardPhase::ShowResult(_)));
        assert_eq!(c.display().rows()[0], "BRL 0.00 = ");
        assert_eq!(c.display().rows()[1], "USD 0.00");
    }

    #[test]
    fn test_input_fault_reported_and_recovered() {
        let mut c = controller(&[Ok(InputEvents::PRESS), Err(()), Ok(InputEvents::PRESS)]);
        let t = boot(&mut c);
        assert_eq!(c.tick(t + 300), Err(ControllerError::Input(())));
        assert_eq!(c.wizard().phase(), WizardPhase::SelectSource);
        assert_eq!(c.tick(t + 310), Ok(Some(WizardPhase::SelectTarget)));
    }

    #[test]
    fn test_boot_render_fault_retries_stage() {
        let mut c = controller(&[]);
        c.display.fail_next = 1;
        assert_eq!(c.tick(0), Err(ControllerError::Display(())));
        assert_eq!(c.stage(), Stage::Boot);
        assert_eq!(c.tick(10), Ok(None));
        assert_eq!(c.stage(), Stage::Splash { until_ms: 3010 });
    }

    #[test]
    fn test_failed_redraw_is_retried() {
        let mut c = controller(&[Ok(InputEvents::PRESS), Ok(InputEvents::x(AxisEvent::MovedPositive))]);
        let t = boot(&mut c);
        c.display.fail_next = 1;
        assert_eq!(c.tick(t + 300), Err(ControllerError::Display(())));
        assert!(c.is_dirty());
        assert_eq!(c.wizard().from(), Currency::Usd);

        c.tick(t + 310).unwrap();
        assert!(!c.is_dirty());
        assert_eq!(c.display().rows()[0], "From: USD");
    }
}
