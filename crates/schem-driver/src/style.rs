// ANSI styling for text output. Every helper returns the plain text
// unchanged when colour is off.

const RESET: &str = "\x1b[0m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

#[derive(Clone, Copy, Debug)]
pub(crate) struct Style {
    color: bool,
}

impl Style {
    pub(crate) fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }

    pub(crate) fn header(self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    /// `key: value`, or just `key:` when the value is empty so that no
    /// line ends in a space.
    pub(crate) fn field(self, key: &str, value: &str) -> String {
        let key = self.paint(CYAN, &format!("{key}:"));
        if value.is_empty() {
            key
        } else {
            format!("{key} {}", self.paint(GREEN, value))
        }
    }
}
