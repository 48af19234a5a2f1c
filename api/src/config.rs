use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::template::DEFAULT_TEMPLATE;

// webapp configuration
//
// everything here has a default so that an empty document (or a missing table) still produces a
// working app
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub brand: String,
    pub log_level: String,
    pub default_template: String,
    pub social: SocialConfig,
}

// placeholder identity used by the simulated social sign-in buttons
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SocialConfig {
    pub email: String,
    pub password: String,
    pub google_name: String,
    pub github_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            brand: String::from("MediaKit Pro"),
            log_level: String::from("debug"),
            default_template: String::from(DEFAULT_TEMPLATE),
            social: SocialConfig::default(),
        }
    }
}

impl Default for SocialConfig {
    fn default() -> Self {
        SocialConfig {
            email: String::from("social@example.com"),
            password: String::from("password"),
            google_name: String::from("Google User"),
            github_name: String::from("GitHub User"),
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> anyhow::Result<Level> {
        Level::from_str(&self.log_level)
            .map_err(|err| anyhow::Error::msg(format!("invalid log_level {}: {err}", self.log_level)))
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: AppConfig,
}

pub fn read_config(doc: &str) -> anyhow::Result<AppConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;

    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(read_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let doc = r#"
            [config]
            brand = "Kit Studio"
            log_level = "warn"

            [config.social]
            google_name = "G User"
        "#;

        let config = read_config(doc).unwrap();

        assert_eq!(config.brand, "Kit Studio");
        assert_eq!(config.log_level().unwrap(), Level::WARN);
        assert_eq!(config.default_template, "modern");
        assert_eq!(config.social.google_name, "G User");
        assert_eq!(config.social.email, "social@example.com");
    }

    #[test]
    fn malformed_documents_are_errors() {
        assert!(read_config("[config]\nbrand = ").is_err());
        assert!(read_config("[config]\nbrand = 5").is_err());
    }

    #[test]
    fn unknown_log_level_is_an_error() {
        let config = AppConfig {
            log_level: String::from("loud"),
            ..Default::default()
        };

        assert!(config.log_level().is_err());
    }
}
