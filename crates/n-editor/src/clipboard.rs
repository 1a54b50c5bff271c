//! Clipboard — where Cut and Copy put text and Paste takes it from.
//!
//! The session talks to a [`Clipboard`] trait object. [`Register`] is the
//! in-process implementation: one slot of text, always available, used by
//! tests and as the fallback when no system clipboard can be reached. The
//! shell provides a system-backed implementation that mirrors into a
//! `Register`.

/// Text storage shared by Cut, Copy and Paste.
pub trait Clipboard {
    /// The current clipboard text, if there is any.
    fn get(&mut self) -> Option<String>;

    /// Replace the clipboard text.
    fn set(&mut self, text: String);
}

/// A single in-memory clipboard slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Register {
    content: String,
}

impl Register {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Clipboard for Register {
    fn get(&mut self) -> Option<String> {
        (!self.content.is_empty()).then(|| self.content.clone())
    }

    fn set(&mut self, text: String) {
        self.content = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_register_has_nothing_to_paste() {
        let mut reg = Register::new();
        assert!(reg.is_empty());
        assert_eq!(reg.get(), None);
    }

    #[test]
    fn set_replaces_content() {
        let mut reg = Register::new();
        reg.set("first".into());
        reg.set("second".into());
        assert_eq!(reg.get(), Some("second".into()));
    }
}
