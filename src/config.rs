use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub swipe: SwipeSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct SwipeSettings {
    /// Chance that a like turns into a match, in `[0, 1]`
    #[serde(default = "default_match_probability")]
    pub match_probability: f64,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            match_probability: default_match_probability(),
        }
    }
}

fn default_match_probability() -> f64 { 0.5 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageSettings {
    /// Directory for swipe snapshots. In-memory storage is used when unset.
    pub session_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    #[serde(default = "default_auth_endpoint")]
    pub endpoint: String,
    pub timeout_secs: Option<u64>,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            endpoint: default_auth_endpoint(),
            timeout_secs: None,
        }
    }
}

fn default_auth_endpoint() -> String { "http://localhost:8000".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Output layout for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    /// Single-line plain text
    Plain,
}

impl LogFormat {
    /// Unknown names fall back to plain text
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Plain,
        }
    }
}

impl LoggingSettings {
    pub fn output_format(&self) -> LogFormat {
        LogFormat::parse(&self.format)
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SPORTMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SPORTMATCH__SWIPE__MATCH_PROBABILITY -> swipe.match_probability
            .add_source(env_source())
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.swipe.match_probability) {
            return Err(ConfigError::Message(format!(
                "swipe.match_probability must be within [0, 1], got {}",
                self.swipe.match_probability
            )));
        }
        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("SPORTMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_swipe_settings() {
        let swipe = SwipeSettings::default();
        assert_eq!(swipe.match_probability, 0.5);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
        assert_eq!(LoggingSettings::default().output_format(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_names() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("default"), LogFormat::Plain);
        assert_eq!(LogFormat::parse(""), LogFormat::Plain);
    }

    #[test]
    fn test_load_from_file_fills_missing_sections() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[swipe]\nmatch_probability = 0.7").unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.swipe.match_probability, 0.7);
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.auth.endpoint, "http://localhost:8000");
        assert!(settings.storage.session_dir.is_none());
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[swipe]\nmatch_probability = 1.5").unwrap();

        assert!(Settings::load_from(file.path()).is_err());
    }
}
