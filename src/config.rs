use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub models: ModelConfig,
    #[serde(default)]
    pub swc: SwcConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the prediction API
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Directory holding the serialized quantile artifacts
    #[serde(default = "default_model_dir")]
    pub dir: String,
    /// 10th percentile artifact file name
    #[serde(default = "default_p10_file")]
    pub p10_file: String,
    /// 50th percentile artifact file name
    #[serde(default = "default_p50_file")]
    pub p50_file: String,
    /// 90th percentile artifact file name
    #[serde(default = "default_p90_file")]
    pub p90_file: String,
}

fn default_model_dir() -> String {
    "models".to_string()
}

fn default_p10_file() -> String {
    "acquisition_model_10.onnx".to_string()
}

fn default_p50_file() -> String {
    "acquisition_model_50.onnx".to_string()
}

fn default_p90_file() -> String {
    "acquisition_model_90.onnx".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            dir: default_model_dir(),
            p10_file: default_p10_file(),
            p50_file: default_p50_file(),
            p90_file: default_p90_file(),
        }
    }
}

impl ModelConfig {
    pub fn p10_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.p10_file)
    }

    pub fn p50_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.p50_file)
    }

    pub fn p90_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.p90_file)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwcConfig {
    /// Base URL of the SportsWorldCentral API
    #[serde(default = "default_swc_base_url")]
    pub base_url: String,
    /// Outbound request timeout in seconds
    #[serde(default = "default_swc_timeout")]
    pub timeout_secs: u64,
}

fn default_swc_base_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_swc_timeout() -> u64 {
    10
}

impl Default for SwcConfig {
    fn default() -> Self {
        Self {
            base_url: default_swc_base_url(),
            timeout_secs: default_swc_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("WAIVERBID_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (WAIVERBID_SERVER__PORT, etc.)
            .add_source(
                Environment::with_prefix("WAIVERBID")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Create a default configuration for CLI usage
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            models: ModelConfig::default(),
            swc: SwcConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }

        if self.server.port == 0 {
            errors.push("server.port must be non-zero".to_string());
        }

        for (label, file) in [
            ("models.p10_file", &self.models.p10_file),
            ("models.p50_file", &self.models.p50_file),
            ("models.p90_file", &self.models.p90_file),
        ] {
            if file.trim().is_empty() {
                errors.push(format!("{label} must not be empty"));
            }
        }

        if !self.swc.base_url.starts_with("http://") && !self.swc.base_url.starts_with("https://") {
            errors.push(format!(
                "swc.base_url must be an http(s) URL, got '{}'",
                self.swc.base_url
            ));
        }

        if self.swc.timeout_secs == 0 {
            errors.push("swc.timeout_secs must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
