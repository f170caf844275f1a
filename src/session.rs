//! In-memory state of one running chat.

use crate::i18n::{Language, Strings};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    sender: Sender,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn sender(&self) -> Sender {
        self.sender
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Session state: message log, input buffer, display name, language and
/// the name gate.
///
/// The message log is append-only. The name gate starts open and closes
/// for good on the first non-blank name.
#[derive(Debug)]
pub struct Session {
    messages: Vec<Message>,
    input: String,
    display_name: Option<String>,
    language: Language,
    name_gate_open: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Session {
    pub const fn new(language: Language) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            display_name: None,
            language,
            name_gate_open: true,
        }
    }

    pub fn append_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub const fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Switches to the other language and returns it.
    pub const fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Records the display name and closes the gate.
    ///
    /// Returns `false` without touching any state when the trimmed name is
    /// empty or the gate is already closed.
    pub fn submit_name(&mut self, name: &str) -> bool {
        let name = name.trim();
        if !self.name_gate_open || name.is_empty() {
            return false;
        }
        self.display_name = Some(name.to_string());
        self.name_gate_open = false;
        true
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    pub const fn is_name_gate_open(&self) -> bool {
        self.name_gate_open
    }
}
