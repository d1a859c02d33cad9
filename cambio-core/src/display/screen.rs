//! Two-row text buffer
//!
//! The panel is a 16x2 character LCD. Text past the last column is
//! dropped rather than wrapped.

use heapless::String;

/// Characters per row
pub const DISPLAY_COLS: usize = 16;

/// Rows on the panel
pub const DISPLAY_ROWS: usize = 2;

/// A screen ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Screen {
    lines: [String<DISPLAY_COLS>; DISPLAY_ROWS],
}

impl Screen {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self {
            lines: [String::new(), String::new()],
        }
    }

    /// Blank both rows
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
    }

    /// Set text at a specific row, truncated to the panel width
    pub fn set_line(&mut self, row: u8, text: &str) {
        if let Some(line) = self.lines.get_mut(row as usize) {
            line.clear();
            let end = floor_char_boundary(text, DISPLAY_COLS);
            let _ = line.push_str(&text[..end]);
        }
    }

    /// Get a line of text
    pub fn get_line(&self, row: u8) -> &str {
        self.lines
            .get(row as usize)
            .map(|line| line.as_str())
            .unwrap_or("")
    }

    /// Both rows, top first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.as_str())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

fn floor_char_boundary(text: &str, max: usize) -> usize {
    if text.len() <= max {
        return text.len();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    end
}
