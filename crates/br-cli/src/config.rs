//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON coefficient table to use instead of the embedded one.
    pub coefficients_path: Option<PathBuf>,

    /// Wake time used when `--wake` is omitted.
    pub default_wake: String,

    /// Sleep hours used when `--sleep` is omitted.
    pub default_sleep_hours: f64,

    /// Coffee count used when `--coffee` is omitted.
    pub default_coffee: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coefficients_path: None,
            default_wake: "08:00".to_string(),
            default_sleep_hours: 8.0,
            default_coffee: 1,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (BR_*)
        figment = figment.merge(Env::prefixed("BR_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for br.
///
/// On Linux: `~/.config/br`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("br"))
}
