use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use chrono::{NaiveDate, Utc};

use crate::manifest::RouteManifest;
use crate::route::{self, DEFAULT_WEIGHT, ROOT_WEIGHT, SitemapEntry};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Builds a sitemap for a file-system routed site.
///
/// Routes come from two places: the framework's route manifest, filtered and
/// normalized into public URL paths, and an overlay of manually registered
/// routes added with [`add`](Self::add). The route list is recomputed from
/// both on every call; nothing is cached.
///
/// Registration mutates the builder, so register everything up front and
/// share the builder read-only afterwards. Sharing one builder across
/// concurrent renders while still calling `add` is not supported.
pub struct SitemapBuilder {
    base_url: String,
    manifest: RouteManifest,
    ignore: Vec<String>,
    overlay: BTreeMap<String, f64>,
}

impl SitemapBuilder {
    /// `base_url` is the absolute site URL without a trailing slash, e.g.
    /// `https://example.com`.
    pub fn new<S: Into<String>>(base_url: S, manifest: RouteManifest) -> Self {
        Self {
            base_url: base_url.into(),
            manifest,
            // The sitemap never lists itself.
            ignore: vec!["sitemap.xml".to_string()],
            overlay: BTreeMap::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The combined route list: listable manifest routes in manifest order,
    /// then overlay routes. An overlay entry for a path the manifest already
    /// produced overwrites that entry's weight instead of duplicating the
    /// URL; new overlay paths are appended.
    pub fn routes(&self) -> Vec<SitemapEntry> {
        let mut entries: Vec<SitemapEntry> = self
            .manifest
            .entries()
            .filter(|&(path, _)| route::is_listable(path, &self.ignore))
            .map(|(path, _)| {
                let path = route::normalize(path);
                let weight = if path == "/" { ROOT_WEIGHT } else { DEFAULT_WEIGHT };
                SitemapEntry { path, weight }
            })
            .collect();

        for (path, &weight) in &self.overlay {
            match entries.iter_mut().find(|entry| &entry.path == path) {
                Some(entry) => entry.weight = weight,
                None => entries.push(SitemapEntry {
                    path: path.clone(),
                    weight,
                }),
            }
        }

        entries
    }

    /// Register a route or a directory of routes at the default weight.
    pub async fn add(&mut self, route: &str) -> &mut Self {
        self.add_weighted(route, DEFAULT_WEIGHT).await
    }

    /// Register a route or a directory of routes.
    ///
    /// If `route` can be listed as a directory, every regular file directly
    /// inside it becomes an overlay entry: `_`-prefixed names are skipped,
    /// the extension is stripped, and the name is prefixed with `/`.
    /// Otherwise the argument itself becomes the overlay key, unchanged.
    /// Listing failures never escape; they select the fallback branch.
    ///
    /// Re-registering a key replaces its weight. Returns the builder for
    /// chaining.
    pub async fn add_weighted(&mut self, route: &str, weight: f64) -> &mut Self {
        match list_files(route).await {
            Ok(names) => {
                for name in names {
                    if name.starts_with('_') {
                        continue;
                    }
                    let key = format!("/{}", route::strip_extension(&name));
                    self.overlay.insert(key, weight);
                }
            }
            Err(_) => {
                self.overlay.insert(route.to_string(), weight);
            }
        }

        self
    }

    /// Render the sitemap XML document.
    pub fn generate(&self) -> String {
        self.generate_at(Utc::now().date_naive())
    }

    fn generate_at(&self, date: NaiveDate) -> String {
        let lastmod = date.format("%Y-%m-%d").to_string();

        let mut xml = String::with_capacity(4096);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.routes() {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&self.base_url);
            xml.push_str(&entry.path);
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&lastmod);
            xml.push_str("</lastmod>\n    <changefreq>daily</changefreq>\n    <priority>");
            xml.push_str(&format!("{:.1}", entry.weight));
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Names of the regular files directly inside `path`. Subdirectories are
/// ignored. This is the builder's only suspension point.
async fn list_files(path: &str) -> io::Result<Vec<String>> {
    let mut dir = tokio::fs::read_dir(Path::new(path)).await?;
    let mut names = Vec::new();

    while let Some(entry) = dir.next_entry().await? {
        if entry.file_type().await?.is_file() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    Ok(names)
}
