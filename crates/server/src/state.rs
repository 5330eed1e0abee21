//! Application State
//!
//! Shared state across all handlers.

use metrics_exporter_prometheus::PrometheusHandle;
use parking_lot::RwLock;
use std::sync::Arc;

use construction_assistant_agent::{QueryAnalyzer, SessionConfig};
use construction_assistant_config::{load_settings, KnowledgeBase, Settings};
use construction_assistant_text_processing::MessageFormatter;

use crate::session::SessionManager;
use crate::ServerError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Settings behind a lock so session settings can be reloaded
    pub config: Arc<RwLock<Settings>>,
    pub sessions: Arc<SessionManager>,
    pub analyzer: Arc<QueryAnalyzer>,
    pub formatter: MessageFormatter,
    metrics: Option<PrometheusHandle>,
    /// Environment name for config reload
    env: Option<String>,
}

impl AppState {
    pub fn new(config: Settings, knowledge_base: Arc<KnowledgeBase>) -> Self {
        let sessions = Arc::new(SessionManager::from_server_config(&config.server));
        Self {
            config: Arc::new(RwLock::new(config)),
            sessions,
            analyzer: Arc::new(QueryAnalyzer::new(knowledge_base)),
            formatter: MessageFormatter::new(),
            metrics: None,
            env: None,
        }
    }

    /// Environment name used by [`AppState::reload_config`]
    pub fn with_env(mut self, env: Option<String>) -> Self {
        self.env = env;
        self
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }

    pub fn metrics(&self) -> Option<&PrometheusHandle> {
        self.metrics.as_ref()
    }

    pub fn get_config(&self) -> parking_lot::RwLockReadGuard<'_, Settings> {
        self.config.read()
    }

    /// Session settings for newly created sessions
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::from(&self.config.read().session)
    }

    /// Reload settings from disk
    ///
    /// Only session settings take effect for sessions created afterwards;
    /// server and knowledge base settings apply at startup.
    pub fn reload_config(&self) -> Result<(), ServerError> {
        let new_config = load_settings(self.env.as_deref())?;
        new_config.validate()?;
        *self.config.write() = new_config;

        tracing::info!("Configuration reloaded");
        Ok(())
    }
}
