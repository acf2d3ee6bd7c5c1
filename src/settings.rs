//! Client settings

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

pub const ENV_PREFIX: &str = "ionic";

/// Settings for the push API client, read from config files and the
/// environment.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// The base URL to use for push API requests
    pub base_url: Url,
    /// The API token sent as a bearer credential on every request
    pub api_token: String,
    /// The number of seconds to wait for push API requests to complete
    pub timeout: usize,
    /// Use human readable (simplified, non-JSON) logging
    pub human_logs: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            base_url: Url::parse("https://api.ionicjs.com").unwrap(),
            api_token: "".to_string(),
            timeout: 3,
            human_logs: false,
        }
    }
}

impl Settings {
    /// Load the settings from the config files in order first then the environment.
    pub fn with_env_and_config_files(filenames: &[String]) -> Result<Self, ConfigError> {
        let mut s = Config::builder();

        // Merge the configs from the files
        for filename in filenames {
            s = s.add_source(File::with_name(filename));
        }

        // Merge the environment overrides
        s = s.add_source(Environment::with_prefix(&ENV_PREFIX.to_uppercase()).separator("__"));

        let built = s.build()?;
        built.try_deserialize::<Settings>()
    }
}
