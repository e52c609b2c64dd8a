//! Hosted-model shopping assistant.
//!
//! The assistant answers free-form buyer questions grounded in the
//! current catalog. It is strictly advisory: it never mutates state, and
//! every failure collapses to a fixed apology so the storefront keeps
//! working without it.

mod client;
mod error;
mod types;

pub use client::AssistantClient;
pub use error::AssistantError;
pub use types::{ChatRequest, ChatResponse, ContentBlock, Message};

/// Reply returned whenever the assistant cannot produce an answer.
pub const FALLBACK_REPLY: &str =
    "I'm having a connection issue. Please try again or call our support line.";
