/// A key press, as far as the secret-sequence matcher cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
    Other,
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowUp"`, `"b"`). Anything else is
    /// [`Key::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }
}

pub const SECRET_CODE: [Key; 10] = [
    Key::ArrowUp,
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::Char('b'),
    Key::Char('a'),
];

/// Incremental matcher for a fixed key sequence.
///
/// `progress` is always below the sequence length between calls: a full
/// match is consumed in the same step that reports it.
#[derive(Debug)]
pub struct SecretSequence {
    expected: &'static [Key],
    progress: usize,
}

impl SecretSequence {
    pub fn new(expected: &'static [Key]) -> Self {
        debug_assert!(!expected.is_empty());
        Self {
            expected,
            progress: 0,
        }
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Feed one key press. Returns `true` when it completes the sequence.
    pub fn feed(&mut self, key: Key) -> bool {
        if key == self.expected[self.progress] {
            self.progress += 1;
            if self.progress == self.expected.len() {
                self.progress = 0;
                return true;
            }
        } else if key == self.expected[0] {
            // A mismatched key that opens the sequence starts a new attempt.
            self.progress = 1;
        } else {
            self.progress = 0;
        }
        false
    }
}

impl Default for SecretSequence {
    fn default() -> Self {
        Self::new(&SECRET_CODE)
    }
}
