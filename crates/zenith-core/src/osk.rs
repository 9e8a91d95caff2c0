//! On-screen keyboard driven by the remote's d-pad.

use zenith_types::input::Button;

use self::OskKey::{Back, Char, Enter, Shift};

/// A key on the virtual keyboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OskKey {
    Char(char),
    Shift,
    Back,
    Enter,
}

/// Key grid, row by row. Rows differ in meaning but share a width.
pub const KEY_ROWS: [[OskKey; 10]; 4] = [
    [
        Char('1'),
        Char('2'),
        Char('3'),
        Char('4'),
        Char('5'),
        Char('6'),
        Char('7'),
        Char('8'),
        Char('9'),
        Char('0'),
    ],
    [
        Char('Q'),
        Char('W'),
        Char('E'),
        Char('R'),
        Char('T'),
        Char('Y'),
        Char('U'),
        Char('I'),
        Char('O'),
        Char('P'),
    ],
    [
        Char('A'),
        Char('S'),
        Char('D'),
        Char('F'),
        Char('G'),
        Char('H'),
        Char('J'),
        Char('K'),
        Char('L'),
        Char('-'),
    ],
    [
        Shift,
        Char('Z'),
        Char('X'),
        Char('C'),
        Char('V'),
        Char('B'),
        Char('N'),
        Char('M'),
        Back,
        Enter,
    ],
];

/// What the submitted text is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardTarget {
    /// Recommendation query.
    Search,
}

/// Result of a keyboard button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OskAction {
    /// Still editing.
    None,
    /// ENTER pressed with this text.
    Submit(String),
    /// Cancel pressed; discard.
    Cancel,
}

#[derive(Debug, Clone)]
pub struct VirtualKeyboard {
    pub target: KeyboardTarget,
    text: String,
    row: usize,
    col: usize,
    shift: bool,
}

impl VirtualKeyboard {
    /// Open with `initial` text, cursor on the first letter row.
    pub fn new(target: KeyboardTarget, initial: &str) -> Self {
        Self {
            target,
            text: initial.to_string(),
            row: 1,
            col: 0,
            shift: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_shifted(&self) -> bool {
        self.shift
    }

    pub fn focused_key(&self) -> OskKey {
        KEY_ROWS[self.row][self.col]
    }

    pub fn handle_input(&mut self, button: &Button) -> OskAction {
        match button {
            Button::Up => {
                self.row = self.row.saturating_sub(1);
                self.clamp_col();
            },
            Button::Down => {
                self.row = (self.row + 1).min(KEY_ROWS.len() - 1);
                self.clamp_col();
            },
            Button::Left => {
                self.col = self.col.saturating_sub(1);
            },
            Button::Right => {
                self.col = (self.col + 1).min(KEY_ROWS[self.row].len() - 1);
            },
            Button::Confirm => return self.press(self.focused_key()),
            Button::Cancel => return OskAction::Cancel,
            _ => {},
        }
        OskAction::None
    }

    fn clamp_col(&mut self) {
        self.col = self.col.min(KEY_ROWS[self.row].len() - 1);
    }

    /// Press a key directly.
    pub fn press(&mut self, key: OskKey) -> OskAction {
        match key {
            Char(c) => {
                let c = if self.shift {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                };
                self.text.push(c);
            },
            Shift => self.shift = !self.shift,
            Back => {
                self.text.pop();
            },
            Enter => return OskAction::Submit(self.text.clone()),
        }
        OskAction::None
    }

    /// Physical keyboard character, taken as typed.
    pub fn type_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }
}
