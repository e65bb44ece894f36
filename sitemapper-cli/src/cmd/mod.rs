use anyhow::{Context, Result};
use sitemapper_core::{RouteManifest, SitemapBuilder};

use crate::config::SitemapperConfig;

pub mod generate;
pub mod serve;

/// Load the route manifest and register any extra routes from config.
pub(crate) async fn build_sitemap(config: &SitemapperConfig) -> Result<SitemapBuilder> {
    let base_url = config.base_url()?.to_string();
    let manifest = RouteManifest::read(&config.build.manifest)
        .with_context(|| format!("Failed to read route manifest {}", config.build.manifest))?;

    println!(
        "Loaded {} manifest routes from {}",
        manifest.len(),
        config.build.manifest
    );

    let mut builder = SitemapBuilder::new(base_url, manifest);
    for extra in &config.site.routes {
        match extra.weight {
            Some(weight) => builder.add_weighted(&extra.path, weight).await,
            None => builder.add(&extra.path).await,
        };
    }

    Ok(builder)
}
