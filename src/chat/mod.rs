//! Interactive chat: controller, presentation and the terminal loop.

/// Slash command parsing and autocomplete.
pub mod command;
/// Session mutations and the reply round trip.
pub mod controller;
mod repl;
mod ui;
/// Message list rendering.
pub mod view;

pub use controller::{ChatController, PendingReply, ReplyKind, SendOutcome};
pub use repl::ChatRepl;
