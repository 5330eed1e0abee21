//! Transcript message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Visitor typing into the assistant panel
    User,
    /// Assistant reply
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Call-to-action link attached to an assistant message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Button label
    pub label: String,
    /// Absolute URL the button opens
    pub href: String,
}

impl CallToAction {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A single message in the transcript
///
/// Messages are immutable once appended. The transcript order is the
/// chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message id
    pub id: String,
    /// Author
    pub role: Role,
    /// Markup content (`**bold**` spans, `\n` line breaks)
    pub content: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Optional call-to-action links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cta: Vec<CallToAction>,
}

impl Message {
    /// Create a new message with a fresh id
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            cta: Vec::new(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Attach call-to-action links
    pub fn with_cta(mut self, cta: Vec<CallToAction>) -> Self {
        self.cta = cta;
        self
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("hello");
        let b = Message::user("hello");
        assert_ne!(a.id, b.id);
        assert!(a.is_user());
        assert!(!a.is_assistant());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_message_serialization_skips_empty_cta() {
        let plain = serde_json::to_value(Message::assistant("hi")).unwrap();
        assert!(plain.get("cta").is_none());
        assert_eq!(plain["role"], "assistant");

        let with_link = Message::assistant("hi").with_cta(vec![CallToAction::new(
            "WhatsApp Owner",
            "https://wa.me/910000000000",
        )]);
        let json = serde_json::to_value(&with_link).unwrap();
        assert_eq!(json["cta"][0]["label"], "WhatsApp Owner");
    }
}
