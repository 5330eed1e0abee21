//! Session Management
//!
//! Registry of live chat sessions keyed by id, with capacity limits and
//! periodic eviction of idle sessions.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use construction_assistant_agent::{ChatSession, QueryAnalyzer, SessionConfig};
use construction_assistant_config::constants::server::{
    DEFAULT_CLEANUP_INTERVAL_SECS, DEFAULT_SESSION_TIMEOUT_SECS,
};
use construction_assistant_config::ServerConfig;

use crate::ServerError;

/// Session manager
pub struct SessionManager {
    sessions: RwLock<HashMap<String, ChatSession>>,
    max_sessions: usize,
    session_timeout: Duration,
    cleanup_interval: Duration,
}

impl SessionManager {
    /// Create a new session manager with default timeouts
    pub fn new(max_sessions: usize) -> Self {
        Self::with_config(
            max_sessions,
            Duration::from_secs(DEFAULT_SESSION_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
        )
    }

    pub fn with_config(
        max_sessions: usize,
        session_timeout: Duration,
        cleanup_interval: Duration,
    ) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
            session_timeout,
            cleanup_interval,
        }
    }

    pub fn from_server_config(config: &ServerConfig) -> Self {
        Self::with_config(
            config.max_sessions,
            Duration::from_secs(config.session_timeout_seconds),
            Duration::from_secs(config.cleanup_interval_seconds),
        )
    }

    /// Start a background task that periodically evicts idle sessions.
    ///
    /// Returns a shutdown sender that stops the task.
    pub fn start_cleanup_task(self: &Arc<Self>) -> watch::Sender<bool> {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let manager = Arc::clone(self);
        let interval = manager.cleanup_interval;

        tokio::spawn(async move {
            let mut interval_timer = tokio::time::interval(interval);
            interval_timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = interval_timer.tick() => {
                        let removed = manager.cleanup_expired();
                        if removed > 0 {
                            tracing::info!(
                                removed,
                                remaining = manager.count(),
                                "Session cleanup"
                            );
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            tracing::info!("Session cleanup task shutting down");
                            break;
                        }
                    }
                }
            }
        });

        shutdown_tx
    }

    /// Create and register a new session
    pub fn create(
        &self,
        analyzer: Arc<QueryAnalyzer>,
        config: SessionConfig,
    ) -> Result<ChatSession, ServerError> {
        let mut sessions = self.sessions.write();

        if sessions.len() >= self.max_sessions {
            self.cleanup_expired_internal(&mut sessions);

            if sessions.len() >= self.max_sessions {
                tracing::warn!(max_sessions = self.max_sessions, "Session capacity reached");
                return Err(ServerError::Capacity);
            }
        }

        let session = ChatSession::new(analyzer, config);
        sessions.insert(session.id().to_string(), session.clone());
        Ok(session)
    }

    pub fn get(&self, id: &str) -> Option<ChatSession> {
        self.sessions.read().get(id).cloned()
    }

    /// Remove and close a session; false when it did not exist
    pub fn remove(&self, id: &str) -> bool {
        match self.sessions.write().remove(id) {
            Some(session) => {
                session.close();
                true
            },
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.sessions.read().len()
    }

    /// Evict idle sessions, returning how many were removed
    pub fn cleanup_expired(&self) -> usize {
        let mut sessions = self.sessions.write();
        self.cleanup_expired_internal(&mut sessions)
    }

    fn cleanup_expired_internal(&self, sessions: &mut HashMap<String, ChatSession>) -> usize {
        let timeout = self.session_timeout;
        let expired: Vec<String> = sessions
            .iter()
            .filter(|(_, s)| s.idle_time() > timeout)
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired {
            if let Some(session) = sessions.remove(id) {
                session.close();
                tracing::info!(session_id = %id, "Expired session");
            }
        }
        expired.len()
    }

    pub fn list(&self) -> Vec<String> {
        self.sessions.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use construction_assistant_config::KnowledgeBase;

    fn analyzer() -> Arc<QueryAnalyzer> {
        Arc::new(QueryAnalyzer::new(KnowledgeBase::builtin()))
    }

    #[tokio::test]
    async fn test_session_create_and_get() {
        let manager = SessionManager::new(10);
        let session = manager.create(analyzer(), SessionConfig::default()).unwrap();

        let retrieved = manager.get(session.id()).unwrap();
        assert_eq!(retrieved.id(), session.id());
        assert_eq!(manager.count(), 1);
    }

    #[tokio::test]
    async fn test_session_remove_closes() {
        let manager = SessionManager::new(10);
        let session = manager.create(analyzer(), SessionConfig::default()).unwrap();
        let id = session.id().to_string();

        assert!(manager.remove(&id));
        assert!(manager.get(&id).is_none());
        assert!(session.is_closed());
        assert!(!manager.remove(&id));
    }

    #[tokio::test]
    async fn test_capacity_limit() {
        let manager = SessionManager::new(1);
        manager.create(analyzer(), SessionConfig::default()).unwrap();
        assert!(matches!(
            manager.create(analyzer(), SessionConfig::default()),
            Err(ServerError::Capacity)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_expire() {
        let manager = SessionManager::with_config(
            10,
            Duration::from_secs(60),
            Duration::from_secs(10),
        );
        let session = manager.create(analyzer(), SessionConfig::default()).unwrap();

        tokio::time::advance(Duration::from_secs(30)).await;
        assert_eq!(manager.cleanup_expired(), 0);

        tokio::time::advance(Duration::from_secs(31)).await;
        assert_eq!(manager.cleanup_expired(), 1);
        assert!(manager.get(session.id()).is_none());
        assert!(session.is_closed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_evicts_and_stops() {
        let manager = Arc::new(SessionManager::with_config(
            10,
            Duration::from_secs(5),
            Duration::from_secs(1),
        ));
        manager.create(analyzer(), SessionConfig::default()).unwrap();

        let shutdown = manager.start_cleanup_task();
        tokio::time::sleep(Duration::from_secs(7)).await;
        assert_eq!(manager.count(), 0);

        shutdown.send(true).unwrap();
    }
}
