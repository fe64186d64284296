//! Configuration management
//!
//! The browser bundle gets its API base URL at compile time (`AGRI_API_URL`).
//! The native server reads the same setting at runtime through the `config`
//! crate: defaults, then an optional `agri-dashboard.{toml,yaml,json}` file,
//! then `AGRI_*` environment variables.

use anyhow::{bail, Result};
use serde::Deserialize;

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Settings the API client needs
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl ClientConfig {
    /// Base URL baked in at build time, or the default
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("AGRI_API_URL"))
    }

    fn from_value(api_url: Option<&str>) -> Self {
        match api_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => Self {
                api_url: url.to_string(),
            },
            None => Self::default(),
        }
    }

    /// The base URL must be absolute http(s) or root-relative (`/api`)
    pub fn validate(&self) -> Result<()> {
        let api_url = self.api_url.trim();
        if api_url.starts_with('/') && !api_url.starts_with("//") {
            return Ok(());
        }
        let parsed = url::Url::parse(api_url)?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => bail!("Unsupported API URL scheme '{}' in {}", other, api_url),
        }
    }
}

/// Base URL for the API client on this platform.
///
/// Invalid values are logged and replaced by [`DEFAULT_API_URL`].
pub fn api_base_url() -> String {
    #[cfg(all(feature = "server", not(target_arch = "wasm32")))]
    let config = server::client_config();
    #[cfg(not(all(feature = "server", not(target_arch = "wasm32"))))]
    let config = ClientConfig::from_build_env();

    match config.validate() {
        Ok(()) => config.api_url,
        Err(e) => {
            tracing::warn!("Invalid API URL {:?}: {}, using default", config.api_url, e);
            DEFAULT_API_URL.to_string()
        }
    }
}

#[cfg(all(feature = "server", not(target_arch = "wasm32")))]
pub use server::{load_config, load_config_from, Config};

#[cfg(all(feature = "server", not(target_arch = "wasm32")))]
mod server {
    use std::path::Path;
    use std::sync::OnceLock;

    use anyhow::Result;
    use serde::Deserialize;

    use super::{default_api_url, ClientConfig};

    #[derive(Debug, Clone, Deserialize)]
    pub struct Config {
        #[serde(default = "default_port")]
        pub port: u16,

        #[serde(default = "default_api_url")]
        pub api_url: String,
    }

    fn default_port() -> u16 {
        8080
    }

    impl Config {
        pub fn client(&self) -> ClientConfig {
            ClientConfig {
                api_url: self.api_url.clone(),
            }
        }

        /// Value to export as the Dioxus server's `PORT`. A `PORT` already in
        /// the environment (set by `dx serve`) wins.
        pub fn launch_port(&self, existing: Option<&str>) -> Option<String> {
            match existing.map(str::trim).filter(|p| !p.is_empty()) {
                Some(_) => None,
                None => Some(self.port.to_string()),
            }
        }
    }

    pub fn load_config() -> Result<Config> {
        load_config_from(None)
    }

    /// Load with an explicit config file instead of `./agri-dashboard.*`
    pub fn load_config_from(file: Option<&Path>) -> Result<Config> {
        let file_source = match file {
            Some(path) => ::config::File::from(path).required(true),
            None => ::config::File::with_name("agri-dashboard").required(false),
        };

        let config = ::config::Config::builder()
            // Start with defaults
            .set_default("port", default_port())?
            .set_default("api_url", default_api_url())?
            .add_source(file_source)
            // Override with environment variables (AGRI_PORT, AGRI_API_URL)
            .add_source(
                ::config::Environment::with_prefix("AGRI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    static CLIENT_CONFIG: OnceLock<ClientConfig> = OnceLock::new();

    /// Client settings for server-side rendering, loaded once
    pub(super) fn client_config() -> ClientConfig {
        CLIENT_CONFIG
            .get_or_init(|| match load_config() {
                Ok(config) => config.client(),
                Err(e) => {
                    tracing::warn!("Failed to load config, using build defaults: {}", e);
                    ClientConfig::from_build_env()
                }
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(ClientConfig::from_value(None).api_url, DEFAULT_API_URL);
        assert_eq!(ClientConfig::from_value(Some("  ")).api_url, DEFAULT_API_URL);
        assert_eq!(ClientConfig::from_value(Some("/api")).api_url, "/api");
    }

    #[test]
    fn test_validate() {
        let ok = |url: &str| {
            ClientConfig {
                api_url: url.to_string(),
            }
            .validate()
            .is_ok()
        };
        assert!(ok(DEFAULT_API_URL));
        assert!(ok("https://farm.example.com/api"));
        assert!(ok("/api"));
        assert!(!ok("ftp://farm.example.com/api"));
        assert!(!ok("//farm.example.com/api"));
        assert!(!ok("localhost:5000"));
        assert!(!ok("api"));
    }

    #[cfg(all(feature = "server", not(target_arch = "wasm32")))]
    mod server_config {
        use super::super::*;
        use serial_test::serial;
        use std::io::Write;

        #[test]
        #[serial]
        fn test_defaults() {
            std::env::remove_var("AGRI_API_URL");
            std::env::remove_var("AGRI_PORT");
            let config = load_config().unwrap();
            assert_eq!(config.port, 8080);
            assert_eq!(config.api_url, DEFAULT_API_URL);
        }

        #[test]
        #[serial]
        fn test_file_then_env_override() {
            std::env::remove_var("AGRI_PORT");
            let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
            writeln!(file, "port = 9000\napi_url = \"/api\"").unwrap();

            let config = load_config_from(Some(file.path())).unwrap();
            assert_eq!(config.port, 9000);
            assert_eq!(config.client().api_url, "/api");

            std::env::set_var("AGRI_API_URL", "https://farm.example.com/api");
            std::env::set_var("AGRI_PORT", "9100");
            let config = load_config_from(Some(file.path())).unwrap();
            std::env::remove_var("AGRI_API_URL");
            std::env::remove_var("AGRI_PORT");
            assert_eq!(config.api_url, "https://farm.example.com/api");
            assert_eq!(config.port, 9100);
        }

        #[test]
        #[serial]
        fn test_double_underscore_prefix_is_ignored() {
            std::env::remove_var("AGRI_API_URL");
            std::env::set_var("AGRI__API_URL", "https://wrong.example.com/api");
            let config = load_config().unwrap();
            std::env::remove_var("AGRI__API_URL");
            assert_eq!(config.api_url, DEFAULT_API_URL);
        }

        #[test]
        #[serial]
        fn test_launch_port_respects_existing_port() {
            std::env::remove_var("AGRI_PORT");
            let config = load_config().unwrap();
            assert_eq!(config.launch_port(None).as_deref(), Some("8080"));
            assert_eq!(config.launch_port(Some("  ")).as_deref(), Some("8080"));
            assert_eq!(config.launch_port(Some("3000")), None);
        }
    }
}
