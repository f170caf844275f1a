//! Applies user actions to the session and drives the reply round trip.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::i18n::Language;
use crate::reply::ResponseClient;
use crate::session::{Message, Session};

/// Where the assistant reply of a send came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// Text produced by the response client (model output or its apology).
    Model,
    /// The reply task failed; the coarse fallback was appended instead.
    Fallback,
}

/// Result of an accepted send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOutcome {
    pub language: Language,
    pub reply: ReplyKind,
}

/// A reply that is still being produced. Hand it back to
/// [`ChatController::finish_send`] to append the assistant message.
#[must_use = "the reply is only appended by `ChatController::finish_send`"]
pub struct PendingReply {
    language: Language,
    task: JoinHandle<String>,
}

impl PendingReply {
    /// Language snapshotted when the send started.
    pub const fn language(&self) -> Language {
        self.language
    }
}

/// Owns the session and the response client.
///
/// Only one reply can be in flight at a time, so every reply lands directly
/// after its user message.
pub struct ChatController {
    session: Session,
    client: Arc<ResponseClient>,
    awaiting_reply: bool,
}

impl ChatController {
    pub fn new(session: Session, client: ResponseClient) -> Self {
        Self {
            session,
            client: Arc::new(client),
            awaiting_reply: false,
        }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &ResponseClient {
        &self.client
    }

    pub fn submit_name(&mut self, name: &str) -> bool {
        let accepted = self.session.submit_name(name);
        if accepted {
            tracing::debug!("name gate closed");
        }
        accepted
    }

    pub const fn toggle_language(&mut self) -> Language {
        self.session.toggle_language()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.session.set_input(text);
    }

    pub const fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Starts sending the current input buffer.
    ///
    /// Returns `None` without touching the session when the input is blank
    /// or a reply is still pending. Otherwise appends the user message,
    /// clears the input and starts the reply on a Tokio task. The user
    /// message is in the log as soon as this returns.
    pub fn begin_send(&mut self) -> Option<PendingReply> {
        if self.awaiting_reply || self.session.input().trim().is_empty() {
            return None;
        }

        let text = self.session.input().to_string();
        let language = self.session.language();

        self.session.append_message(Message::user(text.clone()));
        self.session.clear_input();

        let client = Arc::clone(&self.client);
        let task = tokio::spawn(async move { client.get_reply(&text, language).await });
        self.awaiting_reply = true;

        Some(PendingReply { language, task })
    }

    /// Waits for a pending reply and appends exactly one assistant message.
    pub async fn finish_send(&mut self, pending: PendingReply) -> SendOutcome {
        let PendingReply { language, task } = pending;

        let (reply, kind) = match task.await {
            Ok(reply) => (reply, ReplyKind::Model),
            Err(e) => {
                tracing::error!(%language, error = %e, "reply task failed");
                (
                    language.strings().request_failed.to_string(),
                    ReplyKind::Fallback,
                )
            }
        };

        self.session.append_message(Message::assistant(reply));
        self.awaiting_reply = false;

        SendOutcome {
            language,
            reply: kind,
        }
    }

    /// Sends the current input buffer and waits for the reply.
    pub async fn send(&mut self) -> Option<SendOutcome> {
        let pending = self.begin_send()?;
        Some(self.finish_send(pending).await)
    }

    /// Replaces the input buffer with `text` and sends it.
    pub async fn send_text(&mut self, text: impl Into<String>) -> Option<SendOutcome> {
        self.set_input(text);
        self.send().await
    }
}
