//! # mon - bilingual support chat
//!
//! `mon` is a terminal chat in English and Bengali that forwards each message
//! to a hosted Gemini model, framed as a request to a compassionate mental
//! health support assistant, and prints the reply.
//!
//! ## Flow
//!
//! - A name prompt blocks the chat until a non-blank name is entered.
//! - Every accepted message gets exactly one assistant reply. Model failures
//!   turn into a localized apology in the chat, never into a crash.
//! - `/lang` switches the UI language; earlier messages stay as they were.
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY="your-api-key"
//! mon
//!
//! # Start in Bengali
//! mon --lang bn
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/mon/config.toml`:
//!
//! ```toml
//! [mon]
//! language = "bn"
//! model = "gemini-pro"
//! api_key_env = "GEMINI_API_KEY"
//! ```

/// Interactive chat: controller, presentation and the terminal loop.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Localization table for English and Bengali.
pub mod i18n;

/// Diagnostic logging setup.
pub mod logger;

/// Global output configuration (colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Response client and the Gemini model backend.
pub mod reply;

/// In-memory chat session state.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
