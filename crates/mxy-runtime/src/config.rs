//! Configuration for the MXY application runtime
//!
//! Configuration is layered, later sources overriding earlier ones:
//! built-in defaults, `application.*` files, `application-{profile}.*` files,
//! `MXY_`-prefixed environment variables and finally command-line options.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, Source};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::application::ApplicationIdentity;
use crate::args::ApplicationArguments;
use crate::error::RuntimeResult;

const CONFIG_FILE_NAME: &str = "application";
const CONFIG_SUBDIR: &str = "config";
const ENV_PREFIX: &str = "MXY";
const ENV_SEPARATOR: &str = "__";

/// Resolved application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub application: ApplicationSettings,

    #[serde(default)]
    pub profiles: ProfileSettings,

    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub logging: LoggingSettings,

    /// Force debug logging
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationSettings {
    /// Overrides the identity name in logs and the info endpoint
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// Comma separated list of active profiles
    #[serde(default)]
    pub active: Option<String>,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Start the HTTP listener at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Host to bind to
    #[serde(default = "default_address")]
    pub address: String,

    /// Port to listen on, 0 picks an ephemeral port
    #[serde(default = "default_port")]
    pub port: u16,

    /// How long in-flight requests may drain after shutdown begins
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directives, e.g. "info,mxy_runtime=debug"
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_enabled() -> bool {
    true
}

fn default_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_shutdown_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            address: default_address(),
            port: default_port(),
            shutdown_timeout_secs: default_shutdown_timeout(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration using the current working directory for config files
    pub fn load(identity: &ApplicationIdentity, arguments: &ApplicationArguments) -> RuntimeResult<Self> {
        let dir = std::env::current_dir()?;
        Self::load_from(&dir, identity, arguments)
    }

    /// Load configuration, looking for config files under `dir`
    pub fn load_from(
        dir: &Path,
        identity: &ApplicationIdentity,
        arguments: &ApplicationArguments,
    ) -> RuntimeResult<Self> {
        // First pass decides which profiles are active
        let base: AppConfig = Self::builder(dir, &[], arguments)?
            .build()?
            .try_deserialize()?;
        let profiles = base.active_profiles();

        let config = if profiles.is_empty() {
            base
        } else {
            let mut config: AppConfig = Self::builder(dir, &profiles, arguments)?
                .build()?
                .try_deserialize()?;
            // Profile files cannot switch the active profiles
            config.profiles = base.profiles;
            config
        };

        debug!(application = identity.name, "Resolved configuration sources");
        Ok(config)
    }

    fn builder(
        dir: &Path,
        profiles: &[String],
        arguments: &ApplicationArguments,
    ) -> RuntimeResult<ConfigBuilder<DefaultState>> {
        let locations = [dir.to_path_buf(), dir.join(CONFIG_SUBDIR)];
        let mut builder = Config::builder();

        for location in &locations {
            builder = builder.add_source(config_file(location, CONFIG_FILE_NAME));
        }
        for profile in profiles {
            let name = format!("{}-{}", CONFIG_FILE_NAME, profile);
            for location in &locations {
                builder = builder.add_source(config_file(location, &name));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR),
        );

        for (name, value) in arguments.property_overrides() {
            if !is_property_name(&name) {
                debug!("Ignoring option {} for configuration", name);
                continue;
            }
            builder = builder.set_override(name, value)?;
        }

        Ok(builder)
    }

    /// Active profiles in declaration order
    pub fn active_profiles(&self) -> Vec<String> {
        self.profiles
            .active
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Name to present for the application
    pub fn application_name<'a>(&'a self, identity: &'a ApplicationIdentity) -> &'a str {
        self.application.name.as_deref().unwrap_or(identity.name)
    }

    /// Effective log filter, before `RUST_LOG` is considered
    pub fn log_filter(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.logging.level
        }
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        if self.server.address.contains(':') {
            format!("[{}]:{}", self.server.address, self.server.port)
        } else {
            format!("{}:{}", self.server.address, self.server.port)
        }
    }
}

fn config_file(location: &Path, name: &str) -> impl Source + Send + Sync + 'static {
    let path: PathBuf = location.join(name);
    File::with_name(&path.to_string_lossy()).required(false)
}

fn is_property_name(name: &str) -> bool {
    !name.starts_with('.')
        && !name.ends_with('.')
        && !name.contains("..")
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}
