pub mod builder;
pub mod config;
pub mod manifest;
pub mod route;

// Re-export main types
pub use builder::SitemapBuilder;
pub use manifest::{ManifestError, RouteManifest};
pub use route::{DEFAULT_WEIGHT, ROOT_WEIGHT, SitemapEntry};
