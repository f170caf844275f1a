//! Message list rendering.
//!
//! User messages are right-aligned, assistant messages left-aligned. The
//! terminal scrolls on its own, so [`Transcript`] only has to print the
//! messages appended since the last render.

use crate::session::{Message, Sender};
use crate::ui::Style;

const DEFAULT_WIDTH: usize = 80;

/// Width of the attached terminal, or 80 columns when it cannot be queried.
pub fn terminal_width() -> usize {
    width_or_default(crossterm::terminal::size().ok().map(|(cols, _)| cols))
}

fn width_or_default(cols: Option<u16>) -> usize {
    cols.filter(|&cols| cols > 0).map_or(DEFAULT_WIDTH, usize::from)
}

/// Lays out one message as unstyled lines for the given width.
pub fn layout_message(message: &Message, width: usize) -> Vec<String> {
    message
        .text()
        .lines()
        .map(|line| match message.sender() {
            Sender::User => {
                let len = line.chars().count();
                let pad = width.saturating_sub(len);
                format!("{}{line}", " ".repeat(pad))
            }
            Sender::Assistant => line.to_string(),
        })
        .collect()
}

fn style_line(sender: Sender, line: &str) -> String {
    match sender {
        Sender::User => Style::user(line),
        Sender::Assistant => Style::assistant(line),
    }
}

/// Tracks how much of the message log has been printed.
#[derive(Debug, Default)]
pub struct Transcript {
    rendered: usize,
}

impl Transcript {
    pub const fn new() -> Self {
        Self { rendered: 0 }
    }

    pub const fn rendered(&self) -> usize {
        self.rendered
    }

    /// Returns the messages not yet rendered and marks them as rendered.
    pub fn take_new<'a>(&mut self, messages: &'a [Message]) -> &'a [Message] {
        let start = self.rendered.min(messages.len());
        self.rendered = messages.len();
        &messages[start..]
    }

    /// Prints the messages appended since the last call.
    pub fn render_new(&mut self, messages: &[Message], width: usize) {
        for message in self.take_new(messages) {
            for line in layout_message(message, width) {
                println!("{}", style_line(message.sender(), &line));
            }
            println!();
        }
    }
}
