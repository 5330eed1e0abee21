//! Chat session controller
//!
//! Owns the transcript of one visitor conversation. A submitted message is
//! appended at once; the assistant reply is appended by a background task
//! after the configured thinking delay.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use construction_assistant_config::constants::session::EVENT_CHANNEL_CAPACITY;
use construction_assistant_config::{ReplyOrdering, SessionSettings};
use construction_assistant_core::Message;
use construction_assistant_tools::generators;

use crate::intent::QueryAnalyzer;
use crate::AgentError;

/// Session controller configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Delay before the assistant reply is appended
    pub reply_delay: Duration,
    pub ordering: ReplyOrdering,
    /// Seed the transcript with the welcome message
    pub welcome_message: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from(&SessionSettings::default())
    }
}

impl From<&SessionSettings> for SessionConfig {
    fn from(settings: &SessionSettings) -> Self {
        Self {
            reply_delay: Duration::from_millis(settings.reply_delay_ms),
            ordering: settings.ordering,
            welcome_message: settings.welcome_message,
        }
    }
}

/// Whether a reply is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

/// Session events
#[derive(Debug, Clone)]
pub enum SessionEvent {
    MessageAppended(Message),
    StateChanged(SessionState),
}

/// An appended assistant message with the rule that produced it
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub message: Message,
    pub rule: &'static str,
}

struct Inner {
    id: String,
    config: SessionConfig,
    analyzer: Arc<QueryAnalyzer>,
    transcript: RwLock<Vec<Message>>,
    pending: Mutex<usize>,
    event_tx: broadcast::Sender<SessionEvent>,
    closed: Mutex<bool>,
    created_at: DateTime<Utc>,
    last_activity: Mutex<Instant>,
    /// Completion signal of the most recently queued reply
    lane_tail: Mutex<Option<oneshot::Receiver<()>>>,
}

impl Inner {
    fn append(&self, message: Message) {
        self.transcript.write().push(message.clone());
        *self.last_activity.lock() = Instant::now();
        let _ = self.event_tx.send(SessionEvent::MessageAppended(message));
    }

    fn reply_started(&self) {
        let mut pending = self.pending.lock();
        *pending += 1;
        if *pending == 1 {
            let _ = self
                .event_tx
                .send(SessionEvent::StateChanged(SessionState::AwaitingResponse));
        }
    }

    fn reply_finished(&self) {
        let mut pending = self.pending.lock();
        *pending = pending.saturating_sub(1);
        if *pending == 0 {
            let _ = self
                .event_tx
                .send(SessionEvent::StateChanged(SessionState::Idle));
        }
    }
}

/// Marks one reply as outstanding until dropped, whether the task completes or is aborted
struct PendingGuard(Arc<Inner>);

impl PendingGuard {
    fn new(inner: Arc<Inner>) -> Self {
        inner.reply_started();
        Self(inner)
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.reply_finished();
    }
}

/// Handle to a scheduled assistant reply
#[derive(Debug)]
pub struct PendingReply {
    user_message: Message,
    handle: JoinHandle<AssistantReply>,
}

impl PendingReply {
    /// The user message the reply answers
    pub fn user_message(&self) -> &Message {
        &self.user_message
    }

    /// Abort the reply. Nothing is appended if it has not fired yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the reply; `None` when it was cancelled
    pub async fn wait(self) -> Option<AssistantReply> {
        match self.handle.await {
            Ok(reply) => Some(reply),
            Err(e) if e.is_cancelled() => None,
            Err(e) => {
                tracing::error!(error = %e, "Reply task failed");
                None
            },
        }
    }
}

/// One visitor conversation
#[derive(Clone)]
pub struct ChatSession {
    inner: Arc<Inner>,
}

impl ChatSession {
    /// Create a session with a fresh id
    pub fn new(analyzer: Arc<QueryAnalyzer>, config: SessionConfig) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), analyzer, config)
    }

    pub fn with_id(
        id: impl Into<String>,
        analyzer: Arc<QueryAnalyzer>,
        config: SessionConfig,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let mut transcript = Vec::new();
        if config.welcome_message {
            transcript.push(generators::welcome(analyzer.knowledge_base()).into_message());
        }

        let inner = Inner {
            id: id.into(),
            config,
            analyzer,
            transcript: RwLock::new(transcript),
            pending: Mutex::new(0),
            event_tx,
            closed: Mutex::new(false),
            created_at: Utc::now(),
            last_activity: Mutex::new(Instant::now()),
            lane_tail: Mutex::new(None),
        };

        tracing::info!(session_id = %inner.id, "Session created");
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.event_tx.subscribe()
    }

    /// Snapshot of the transcript in chronological order
    pub fn transcript(&self) -> Vec<Message> {
        self.inner.transcript.read().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.transcript.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn state(&self) -> SessionState {
        if *self.inner.pending.lock() > 0 {
            SessionState::AwaitingResponse
        } else {
            SessionState::Idle
        }
    }

    pub fn is_closed(&self) -> bool {
        *self.inner.closed.lock()
    }

    /// Time since the last appended message
    pub fn idle_time(&self) -> Duration {
        self.inner.last_activity.lock().elapsed()
    }

    /// Stop accepting messages. Replies already scheduled still land.
    pub fn close(&self) {
        let mut closed = self.inner.closed.lock();
        if !*closed {
            *closed = true;
            tracing::info!(session_id = %self.inner.id, "Session closed");
        }
    }

    /// Append a user message and schedule the assistant reply
    pub fn submit(&self, text: &str) -> Result<PendingReply, AgentError> {
        if self.is_closed() {
            return Err(AgentError::SessionClosed);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(AgentError::EmptyMessage);
        }

        let user_message = Message::user(text);
        self.inner.append(user_message.clone());

        let query = text.to_string();
        let guard = PendingGuard::new(self.inner.clone());
        let inner = self.inner.clone();

        let (previous, done) = match inner.config.ordering {
            ReplyOrdering::Queued => {
                let (tx, rx) = oneshot::channel();
                let previous = inner.lane_tail.lock().replace(rx);
                (previous, Some(tx))
            },
            ReplyOrdering::Interleaved => (None, None),
        };

        let handle = tokio::spawn(async move {
            let _guard = guard;
            if let Some(previous) = previous {
                // Err means the previous reply was cancelled; the lane moves on
                let _ = previous.await;
            }

            tokio::time::sleep(inner.config.reply_delay).await;

            let resolution = inner.analyzer.analyze(&query);
            let message = resolution.reply.into_message();
            inner.append(message.clone());

            if let Some(done) = done {
                let _ = done.send(());
            }

            tracing::debug!(session_id = %inner.id, rule = resolution.rule, "Reply appended");
            AssistantReply {
                message,
                rule: resolution.rule,
            }
        });

        Ok(PendingReply {
            user_message,
            handle,
        })
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.inner.id)
            .field("messages", &self.len())
            .field("state", &self.state())
            .finish()
    }
}
