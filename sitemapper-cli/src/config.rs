use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration that merges CLI args, env vars, config files, and defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SitemapperConfig {
    /// Build configuration
    pub build: BuildConfig,
    /// Site configuration (from sitemapper-core)
    #[serde(flatten)]
    pub site: sitemapper_core::config::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Route manifest written by the framework's build step
    pub manifest: String,
    /// Output file for the generated sitemap, `-` for stdout
    pub output: String,
    /// Configuration file path
    pub config: String,
    /// Host for the sitemap server
    pub host: String,
    /// Port for the sitemap server
    pub port: u16,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            manifest: "./manifest.json".to_string(),
            output: "./sitemap.xml".to_string(),
            config: "./sitemapper.toml".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for SitemapperConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            site: sitemapper_core::config::Config::default(),
        }
    }
}

impl SitemapperConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (SITEMAPPER_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let config_file = args
            .get_one::<String>("config")
            .cloned()
            .unwrap_or_else(|| "./sitemapper.toml".to_string());

        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        let defaults = Self::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. Add configuration file if it exists
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::with_name(&config_file.replace(".toml", "")));
        }

        // 3. Add environment variables with SITEMAPPER_ prefix
        builder = builder.add_source(
            Environment::with_prefix("SITEMAPPER")
                .prefix_separator("_")
                .separator("__"), // Use double underscore for nested keys
        );

        // 4. Override with CLI arguments (highest priority)
        if let Some(manifest) = args.get_one::<String>("manifest") {
            builder = builder.set_override("build.manifest", manifest.as_str())?;
        }
        if let Some(url) = args.get_one::<String>("base-url") {
            builder = builder.set_override("site.url", url.as_str())?;
        }
        builder = builder.set_override("build.config", config_file.as_str())?;
        // Only override with CLI args that are actually defined for this command
        if let Some(output) = args.try_get_one::<String>("output").unwrap_or(None) {
            builder = builder.set_override("build.output", output.as_str())?;
        }
        if let Some(host) = args.try_get_one::<String>("host").unwrap_or(None) {
            builder = builder.set_override("build.host", host.as_str())?;
        }
        if let Some(port) = args.try_get_one::<String>("port").unwrap_or(None) {
            if let Ok(port) = port.parse::<u16>() {
                builder = builder.set_override("build.port", i64::from(port))?;
            }
        }

        // Build and deserialize
        let config = builder.build()?;
        let sitemapper_config: SitemapperConfig = config.try_deserialize()?;

        Ok(sitemapper_config)
    }

    /// Base URL for generated locations. Required: there is no sensible
    /// default for another site's public URL.
    pub fn base_url(&self) -> Result<&str> {
        self.site
            .site
            .as_ref()
            .and_then(|site| site.url.as_deref())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No base URL set. Pass --base-url or set site.url in {}",
                    self.build.config
                )
            })
    }
}
