use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parsing(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parsing(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parsing(value)
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct Config {
    pub site: Option<SiteConfig>,
    /// Routes to register on top of the manifest, passed to
    /// `SitemapBuilder::add` one by one.
    #[serde(default)]
    pub routes: Vec<ExtraRoute>,
}

impl Config {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&data)?;

        Ok(config)
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute base URL of the site, without a trailing slash.
    pub url: Option<String>,
}

/// A manually registered route or directory. Omitting the weight uses the
/// default.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ExtraRoute {
    pub path: String,
    pub weight: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [site]
            url = "https://example.com"

            [[routes]]
            path = "/pricing"
            weight = 0.5

            [[routes]]
            path = "./extra"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.site.unwrap().url.as_deref(),
            Some("https://example.com")
        );
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].path, "/pricing");
        assert_eq!(config.routes[0].weight, Some(0.5));
        assert_eq!(config.routes[1].weight, None);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.site.is_none());
        assert!(config.routes.is_empty());
    }
}
