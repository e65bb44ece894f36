use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug)]
pub enum ManifestError {
    Io(std::io::Error),
    Parsing(serde_json::Error),
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Io(e) => write!(f, "IO error: {}", e),
            ManifestError::Parsing(e) => write!(f, "JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for ManifestError {}

impl From<std::io::Error> for ManifestError {
    fn from(value: std::io::Error) -> Self {
        ManifestError::Io(value)
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(value: serde_json::Error) -> Self {
        ManifestError::Parsing(value)
    }
}

/// The route manifest the hosting framework emits at build time: a mapping
/// from file-system route path (`./routes/about.tsx`) to a handler
/// reference. Handler values are opaque; only the paths matter here.
/// Iteration follows the manifest's own order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteManifest {
    #[serde(default)]
    routes: Map<String, Value>,
}

impl RouteManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a manifest from the JSON file the framework's build step wrote.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    pub fn parse(json: &str) -> Result<Self, ManifestError> {
        let manifest: RouteManifest = serde_json::from_str(json)?;
        Ok(manifest)
    }

    /// Register a route. Re-inserting a path replaces its handler.
    pub fn insert<P: Into<String>>(&mut self, path: P, handler: Value) {
        self.routes.insert(path.into(), handler);
    }

    /// (path, handler) pairs in manifest order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.routes.iter().map(|(path, handler)| (path.as_str(), handler))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
