use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::observability::MetricsConfig;

/// Default session secret, only suitable for development
pub const DEV_SESSION_SECRET: &str = "dev_secret_key";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Image upload settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Where uploads are written while they are analyzed
    pub scratch_dir: PathBuf,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
    pub allowed_extensions: Vec<String>,
}

/// Model artifact location
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub dir: PathBuf,
    pub artifact_name: String,
    /// Extension an uploaded artifact must carry
    pub artifact_extension: String,
}

/// Preprocessing and stub parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub input_size: u32,
    pub confidence_min: f64,
    pub confidence_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub secret: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: PathBuf::from("public"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            scratch_dir: PathBuf::from("/tmp/uploads"),
            max_body_size: 16 * 1024 * 1024,
            allowed_extensions: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("model"),
            artifact_name: "osteoporosis_model.h5".to_string(),
            artifact_extension: "h5".to_string(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_size: 224,
            confidence_min: 0.7,
            confidence_max: 0.9,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: DEV_SESSION_SECRET.to_string(),
        }
    }
}

impl ModelConfig {
    /// Full path of the single model artifact
    pub fn artifact_path(&self) -> PathBuf {
        self.dir.join(&self.artifact_name)
    }
}

impl SessionConfig {
    pub fn is_default_secret(&self) -> bool {
        self.secret == DEV_SESSION_SECRET
    }
}

impl AppConfig {
    /// Loads defaults, `config/default`, `config/local`, `APP__*` variables,
    /// then the `PORT` and `SESSION_SECRET` overrides.
    pub fn load() -> Result<Self, config::ConfigError> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .map(i64::from);

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("upload.allowed_extensions")
                    .try_parsing(true),
            )
            .set_override_option("server.port", port)?
            .set_override_option("session.secret", std::env::var("SESSION_SECRET").ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Rejects settings the service cannot run with
    pub fn validate(&self) -> Result<(), DomainError> {
        let analysis = &self.analysis;

        if analysis.input_size == 0 {
            return Err(DomainError::configuration("analysis.input_size must be greater than 0"));
        }

        let unit = 0.0..=1.0;

        if !unit.contains(&analysis.confidence_min) || !unit.contains(&analysis.confidence_max) {
            return Err(DomainError::configuration(
                "analysis confidence bounds must be between 0 and 1",
            ));
        }

        if analysis.confidence_min > analysis.confidence_max {
            return Err(DomainError::configuration(format!(
                "analysis.confidence_min ({}) exceeds analysis.confidence_max ({})",
                analysis.confidence_min, analysis.confidence_max
            )));
        }

        if self.upload.max_body_size == 0 {
            return Err(DomainError::configuration("upload.max_body_size must be greater than 0"));
        }

        if self.upload.allowed_extensions.is_empty() {
            return Err(DomainError::configuration("upload.allowed_extensions cannot be empty"));
        }

        if self.model.artifact_name.is_empty() {
            return Err(DomainError::configuration("model.artifact_name cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.upload.max_body_size, 16 * 1024 * 1024);
        assert_eq!(config.upload.allowed_extensions, vec!["png", "jpg", "jpeg"]);
        assert_eq!(config.upload.scratch_dir, PathBuf::from("/tmp/uploads"));
        assert_eq!(config.analysis.input_size, 224);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.session.is_default_secret());
    }

    #[test]
    fn test_artifact_path() {
        let config = ModelConfig::default();
        assert_eq!(
            config.artifact_path(),
            PathBuf::from("model").join("osteoporosis_model.h5")
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_confidence_range_is_rejected() {
        let mut config = AppConfig::default();
        config.analysis.confidence_min = 0.95;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
    }

    #[test]
    fn test_confidence_outside_unit_interval_is_rejected() {
        let mut config = AppConfig::default();
        config.analysis.confidence_max = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_sizes_are_rejected() {
        let mut config = AppConfig::default();
        config.analysis.input_size = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.upload.max_body_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"server": {"port": 9000}}"#).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.model.artifact_extension, "h5");
    }

    #[test]
    fn test_log_format_deserialization() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"level": "debug", "format": "json"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
    }
}
