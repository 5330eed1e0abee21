//! Conversational core of the construction assistant
//!
//! Features:
//! - Ordered intent cascade mapping a query to a response generator
//! - Fallback to a WhatsApp contact when no rule matches
//! - Chat sessions with a delayed, cancellable assistant reply

pub mod intent;
pub mod session;

pub use intent::{QueryAnalyzer, QueryContext, Resolution, Rule, CASCADE, FALLBACK_RULE};
pub use session::{
    AssistantReply, ChatSession, PendingReply, SessionConfig, SessionEvent, SessionState,
};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Session is closed")]
    SessionClosed,
}
