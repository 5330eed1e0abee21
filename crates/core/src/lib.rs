//! Core types for the construction assistant
//!
//! This crate provides foundational types used across all other crates:
//! - Transcript messages, roles and call-to-action links
//! - Structured reply documents produced by response generators
//! - Indian rupee formatting

pub mod conversation;
pub mod currency;
pub mod reply;

pub use conversation::{CallToAction, Message, Role};
pub use currency::{format_indian, format_inr, round_rupees};
pub use reply::{Emphasis, Line, Reply, ReplyBuilder, Span};
