//! Screens for each stage and wizard phase

use heapless::String;

use super::screen::{Screen, DISPLAY_COLS};
use crate::amount::{AmountDigits, Cursor, DECIMAL_POINT_INDEX};
use crate::conversion::Conversion;
use crate::currency::Currency;

/// Prefix on the source selection screen
pub const FROM_PREFIX: &str = "From: ";

/// Prefix on the target selection screen
pub const TO_PREFIX: &str = "To: ";

/// Marker drawn under the digit being edited
pub const CARET: char = '^';

/// Scratch line, wider than the panel so formatting never fails early
type Line = String<32>;

/// Power-on banner
pub fn splash_screen() -> Screen {
    let mut screen = Screen::new();
    screen.set_line(0, "CAMBIO LIVE");
    screen
}

/// Waiting for the first button press
pub fn start_screen() -> Screen {
    let mut screen = Screen::new();
    screen.set_line(0, "5 Currencies");
    screen.set_line(1, "Press button...");
    screen
}

/// Currency selection: prefix and symbol on top, name below
pub fn selection_screen(prefix: &str, currency: Currency) -> Screen {
    let mut screen = Screen::new();
    let mut line = Line::new();
    let _ = write_to_string(&mut line, format_args!("{}{}", prefix, currency.symbol()));
    screen.set_line(0, &line);
    screen.set_line(1, currency.name());
    screen
}

/// Amount entry: `ddd.dd SYM` (or `ddddd SYM`) with a caret line
pub fn entry_screen(from: Currency, digits: &AmountDigits, cursor: Cursor) -> Screen {
    let whole_units = from.is_whole_units();
    let mut line = Line::new();
    for (i, d) in digits.digits().iter().enumerate() {
        if i == DECIMAL_POINT_INDEX && !whole_units {
            let _ = line.push('.');
        }
        let _ = line.push(char::from(b'0' + d));
    }
    let _ = write_to_string(&mut line, format_args!(" {}", from.symbol()));

    let mut caret = Line::new();
    for _ in 0..cursor.display_column(whole_units).min(DISPLAY_COLS - 1) {
        let _ = caret.push(' ');
    }
    let _ = caret.push(CARET);

    let mut screen = Screen::new();
    screen.set_line(0, &line);
    screen.set_line(1, &caret);
    screen
}

/// Conversion result: `SYM amount = ` over `SYM amount`
pub fn result_screen(conversion: &Conversion) -> Screen {
    let mut top = Line::new();
    let _ = write_to_string(
        &mut top,
        format_args!("{} {} = ", conversion.from.symbol(), conversion.source()),
    );
    let mut bottom = Line::new();
    let _ = write_to_string(
        &mut bottom,
        format_args!("{} {}", conversion.to.symbol(), conversion.result),
    );

    let mut screen = Screen::new();
    screen.set_line(0, &top);
    screen.set_line(1, &bottom);
    screen
}

fn write_to_string(s: &mut Line, args: core::fmt::Arguments<'_>) -> core::fmt::Result {
    use core::fmt::Write;
    s.write_fmt(args)
}
