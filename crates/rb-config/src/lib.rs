//! # rb-config
//!
//! Layered configuration for the Rusty-Blog binary.
//!
//! # Loading Order
//! 1. Built-in defaults
//! 2. `rusty-blog.toml` in the working directory, or an explicit file
//! 3. Environment variables (highest priority), e.g. `RUSTY_BLOG__ADMIN__USERNAME`
//!
//! A `.env` file is read into the environment first.

use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, Source};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "rusty-blog";
pub const ENV_PREFIX: &str = "RUSTY_BLOG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Shown as the page title by the front end.
    pub site_title: String,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
    /// Start with the fixture posts instead of an empty store.
    pub seed_posts: bool,
    pub admin: AdminConfig,
}

/// The single account the credential check recognizes.
#[derive(Debug, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    /// Plaintext password, hashed at startup. Ignored when `password_hash` is set.
    pub password: SecretString,
    /// Pre-computed Argon2 PHC string.
    #[serde(default)]
    pub password_hash: Option<String>,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    Config::builder()
        .set_default("site_title", "Blog Site")?
        .set_default("log_level", "info")?
        .set_default("seed_posts", true)?
        .set_default("admin.username", "admin")?
        .set_default("admin.password", "admin123")
}

/// `RUSTY_BLOG__SECTION__KEY` variables, e.g. `RUSTY_BLOG__ADMIN__USERNAME`.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl AppConfig {
    /// Loads from defaults, the config file, and the environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Self::layered(file, environment())
    }

    /// Stacks `file` over the defaults and `env` over both.
    pub fn layered<S>(file: S, env: Environment) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings = defaults()?.add_source(file).add_source(env).build()?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        debug!(
            site_title = %config.site_title,
            seed_posts = config.seed_posts,
            admin = %config.admin.username,
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.admin.username.trim().is_empty() {
            return Err(ConfigError::Invalid("admin.username must not be empty".into()));
        }
        let has_hash = self
            .admin
            .password_hash
            .as_deref()
            .is_some_and(|hash| !hash.is_empty());
        if !has_hash && self.admin.password.expose_secret().is_empty() {
            return Err(ConfigError::Invalid(
                "admin.password or admin.password_hash is required".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{FileFormat, Map};
    use std::path::PathBuf;

    fn with_env(toml: &str, vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::layered(
            File::from_str(toml, FileFormat::Toml),
            environment().source(Some(vars)),
        )
    }

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        let settings = defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        AppConfig::from_settings(settings)
    }

    #[test]
    fn defaults_match_fixture() {
        let config = from_toml("").unwrap();
        assert_eq!(config.site_title, "Blog Site");
        assert_eq!(config.log_level, "info");
        assert!(config.seed_posts);
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.admin.password.expose_secret(), "admin123");
        assert!(config.admin.password_hash.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let config = from_toml(
            r#"
            site_title = "Notes"
            seed_posts = false

            [admin]
            username = "editor"
            password_hash = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA"
            "#,
        )
        .unwrap();
        assert_eq!(config.site_title, "Notes");
        assert!(!config.seed_posts);
        assert_eq!(config.admin.username, "editor");
        assert!(config.admin.password_hash.is_some());
    }

    #[test]
    fn rejects_empty_admin_username() {
        let err = from_toml("[admin]\nusername = \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_missing_password() {
        let err = from_toml("[admin]\npassword = \"\"").unwrap_err();
        assert!(err.to_string().contains("admin.password"));
    }

    #[test]
    fn env_overrides_defaults_and_file() {
        let config = with_env(
            "site_title = \"Notes\"\n[admin]\nusername = \"writer\"",
            &[
                ("RUSTY_BLOG__ADMIN__USERNAME", "editor"),
                ("RUSTY_BLOG__SEED_POSTS", "false"),
            ],
        )
        .unwrap();
        assert_eq!(config.admin.username, "editor");
        assert!(!config.seed_posts);
        assert_eq!(config.site_title, "Notes");
    }

    #[test]
    fn numeric_env_password_stays_a_string() {
        let config = with_env("", &[("RUSTY_BLOG__ADMIN__PASSWORD", "12345678")]).unwrap();
        assert_eq!(config.admin.password.expose_secret(), "12345678");
    }

    #[test]
    fn unprefixed_env_is_ignored() {
        let config = with_env("", &[("ADMIN__USERNAME", "intruder")]).unwrap();
        assert_eq!(config.admin.username, "admin");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("does/not/exist/rusty-blog.toml");
        let err = AppConfig::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn password_is_redacted_in_debug() {
        let config = from_toml("").unwrap();
        assert!(!format!("{config:?}").contains("admin123"));
    }
}
