//! Configuration management for the construction assistant
//!
//! Supports loading configuration from:
//! - YAML files (`config/default.yaml`, `config/{env}.yaml`)
//! - Environment variables (`ASSISTANT__` prefix, `__` separator)
//!
//! # Knowledge Base
//!
//! Construction reference data (packages, BHK configurations, plots,
//! add-ons, phases, materials, guidance) lives in `data/construction.yaml`
//! and is exposed as [`KnowledgeBase`]. It is embedded at build time and can
//! be replaced at runtime through `knowledge_base_path`.

pub mod constants;
pub mod knowledge;
pub mod settings;

pub use knowledge::{
    addon_ids, normalize_bhk_label, normalize_plot_label, package_ids, AdditionalCost,
    ConstructionPhase, CostRange, CostUnit, HouseConfiguration, KnowledgeBase, Package,
    PlotSize, RoomType,
};
pub use settings::{
    load_settings, load_settings_from_file, ObservabilityConfig, ReplyOrdering,
    RuntimeEnvironment, ServerConfig, SessionSettings, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
