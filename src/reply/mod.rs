//! Response client: turns user text into assistant text via a hosted model.

mod client;
mod error;
mod gemini;
mod model;

pub use client::{ResponseClient, build_prompt};
pub use error::ModelError;
pub use gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL, GeminiModel};
pub use model::GenerativeModel;
