//! Application configuration

mod app_config;

pub use app_config::{
    AnalysisConfig, AppConfig, DEV_SESSION_SECRET, LogFormat, LoggingConfig, ModelConfig,
    ServerConfig, SessionConfig, UploadConfig,
};
