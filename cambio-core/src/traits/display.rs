//! Character display trait

use crate::display::Screen;

/// Newline in text moves to the start of the second row
pub const NEWLINE: char = '\n';

/// Trait for a two-row character display
///
/// Implementations own the bus and any timing the panel needs; the
/// core only issues logical operations.
pub trait DisplayDriver {
    /// Error reported by the underlying bus
    type Error;

    /// Send one command byte
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send one character byte at the cursor
    fn write_char(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Clear the screen and home the cursor
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the cursor to column 0 of `row`; rows past the last clamp
    fn move_cursor_to_row(&mut self, row: u8) -> Result<(), Self::Error>;

    /// Write text at the cursor
    ///
    /// A newline moves to the second row instead of being printed.
    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        for byte in text.bytes() {
            if byte == NEWLINE as u8 {
                self.move_cursor_to_row(1)?;
            } else {
                self.write_char(byte)?;
            }
        }
        Ok(())
    }
}

/// Helper trait for drawing whole screens
pub trait DisplayExt: DisplayDriver {
    /// Clear, then write both rows of `screen`
    fn render(&mut self, screen: &Screen) -> Result<(), Self::Error> {
        self.clear()?;
        for (row, line) in screen.lines().enumerate() {
            if row > 0 {
                self.move_cursor_to_row(row as u8)?;
            }
            self.write_text(line)?;
        }
        Ok(())
    }
}

impl<T: DisplayDriver + ?Sized> DisplayExt for T {}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// Logical operation seen by [`RecordingDisplay`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Op {
        Command(u8),
        Char(u8),
        Clear,
        Row(u8),
    }

    /// Display that records operations and can be told to fail
    #[derive(Debug, Default)]
    pub struct RecordingDisplay {
        pub ops: std::vec::Vec<Op>,
        pub fail_next: usize,
    }

    impl RecordingDisplay {
        /// Text written to each row since the last clear
        pub fn rows(&self) -> [std::string::String; 2] {
            let mut rows = [std::string::String::new(), std::string::String::new()];
            let mut row = 0usize;
            for op in &self.ops {
                match *op {
                    Op::Clear => {
                        rows = [std::string::String::new(), std::string::String::new()];
                        row = 0;
                    }
                    Op::Row(r) => row = (r as usize).min(1),
                    Op::Char(c) => rows[row].push(c as char),
                    Op::Command(_) => {}
                }
            }
            rows
        }

        fn record(&mut self, op: Op) -> Result<(), ()> {
            if self.fail_next > 0 {
                self.fail_next -= 1;
                return Err(());
            }
            self.ops.push(op);
            Ok(())
        }
    }

    impl DisplayDriver for RecordingDisplay {
        type Error = ();

        fn write_command(&mut self, command: u8) -> Result<(), ()> {
            self.record(Op::Command(command))
        }

        fn write_char(&mut self, byte: u8) -> Result<(), ()> {
            self.record(Op::Char(byte))
        }

        fn clear(&mut self) -> Result<(), ()> {
            self.record(Op::Clear)
        }

        fn move_cursor_to_row(&mut self, row: u8) -> Result<(), ()> {
            self.record(Op::Row(row))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{Op, RecordingDisplay};
    use super::*;

    #[test]
    fn test_newline_moves_to_second_row() {
        let mut display = RecordingDisplay::default();
        display.write_text("A\nB").unwrap();
        assert_eq!(
            display.ops,
            std::vec![Op::Char(b'A'), Op::Row(1), Op::Char(b'B')]
        );
    }

    #[test]
    fn test_render_clears_then_writes_rows() {
        let mut screen = Screen::new();
        screen.set_line(0, "Hi");
        screen.set_line(1, "Yo");
        let mut display = RecordingDisplay::default();
        display.render(&screen).unwrap();
        assert_eq!(
            display.ops,
            std::vec![
                Op::Clear,
                Op::Char(b'H'),
                Op::Char(b'i'),
                Op::Row(1),
                Op::Char(b'Y'),
                Op::Char(b'o'),
            ]
        );
    }

    #[test]
    fn test_render_stops_on_error() {
        let mut display = RecordingDisplay {
            fail_next: 1,
            ..Default::default()
        };
        assert_eq!(display.render(&Screen::new()), Err(()));
        assert!(display.ops.is_empty());
    }
}
