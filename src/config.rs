use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub templates: TemplateSettings,
    #[serde(default, rename = "static")]
    pub assets: StaticSettings,
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

// Binds on all interfaces so the app is reachable from inside a container
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Overrides the crate version shown in page footers when set
    pub version: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            version: None,
        }
    }
}

fn default_site_name() -> String { "London House Price Predictor".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSettings {
    #[serde(default = "default_template_dir")]
    pub dir: String,
    /// Re-read templates from disk on change (development default)
    #[serde(default = "default_auto_reload")]
    pub auto_reload: bool,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            dir: default_template_dir(),
            auto_reload: default_auto_reload(),
        }
    }
}

fn default_template_dir() -> String { "templates".to_string() }
fn default_auto_reload() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct StaticSettings {
    #[serde(default = "default_static_dir")]
    pub dir: String,
}

impl Default for StaticSettings {
    fn default() -> Self {
        Self { dir: default_static_dir() }
    }
}

fn default_static_dir() -> String { "static".to_string() }

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

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local config file (config/local.toml, for development overrides)
    /// 4. Environment variables (prefixed with HOUSEPRICE__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HOUSEPRICE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HOUSEPRICE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HOUSEPRICE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Version string displayed in page footers
    pub fn display_version(&self) -> String {
        self.site
            .version
            .clone()
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_settings() {
        let server = ServerSettings::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 5000);
        assert!(server.workers.is_none());
    }

    #[test]
    fn test_default_site_and_templates() {
        let site = SiteSettings::default();
        assert_eq!(site.name, "London House Price Predictor");
        assert!(site.version.is_none());

        let templates = TemplateSettings::default();
        assert_eq!(templates.dir, "templates");
        assert!(templates.auto_reload);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_display_version_override() {
        let mut settings = Settings::default();
        assert_eq!(settings.display_version(), env!("CARGO_PKG_VERSION"));

        settings.site.version = Some("2.3.0".to_string());
        assert_eq!(settings.display_version(), "2.3.0");
    }
}
