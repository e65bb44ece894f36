//! Route path filtering and normalization.
//!
//! Manifest paths look like `./routes/about.tsx`. A route is listable when
//! its file name (extension stripped) is not a dynamic segment (`[id]`), not
//! framework-internal (`_layout`), and not on the builder's ignore list. A
//! listable path is then normalized into the public URL it serves.

/// Prefix the framework puts in front of every route file path.
pub const ROUTES_PREFIX: &str = "./routes";

/// Crawl priority assigned to every route that isn't the site root.
pub const DEFAULT_WEIGHT: f64 = 0.8;

/// Crawl priority assigned to the site root.
pub const ROOT_WEIGHT: f64 = 1.0;

/// A public URL path paired with its crawl priority weight.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub path: String,
    pub weight: f64,
}

/// Strip the final extension of the last path segment, leaving any earlier
/// dots alone. `./routes/sitemap.xml.ts` becomes `./routes/sitemap.xml`.
pub(crate) fn strip_extension(path: &str) -> &str {
    let Some(dot) = path.rfind('.') else {
        return path;
    };
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    if dot > segment_start {
        &path[..dot]
    } else {
        path
    }
}

/// File name of the last path segment with its extension stripped.
pub(crate) fn file_stem(path: &str) -> &str {
    let stripped = strip_extension(path);
    match stripped.rfind('/') {
        Some(i) => &stripped[i + 1..],
        None => stripped,
    }
}

/// A file name wholly enclosed in brackets matches multiple URLs at runtime
/// and has no single canonical listing.
pub(crate) fn is_dynamic(stem: &str) -> bool {
    stem.len() > 2 && stem.starts_with('[') && stem.ends_with(']')
}

/// Whether a manifest path belongs in the sitemap at all.
pub(crate) fn is_listable(path: &str, ignore: &[String]) -> bool {
    let stem = file_stem(path);

    if is_dynamic(stem) || stem.starts_with('_') {
        return false;
    }

    !ignore.iter().any(|ignored| ignored == stem)
}

/// Turn a manifest path into the public URL path it serves.
///
/// Strips the extension and the routes-root prefix, then collapses a trailing
/// `index` segment, since an index file is its directory's own URL. The
/// result always starts with `/`; the site root comes out as `/`.
pub(crate) fn normalize(path: &str) -> String {
    let path = strip_extension(path);
    let path = path.strip_prefix(ROUTES_PREFIX).unwrap_or(path);
    let path = path.trim_start_matches('.');

    let mut normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    if normalized.ends_with("/index") {
        normalized.truncate(normalized.len() - "index".len());
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("./routes/about.tsx"), "./routes/about");
        assert_eq!(strip_extension("./routes/about"), "./routes/about");
        assert_eq!(strip_extension("./routes/sitemap.xml.ts"), "./routes/sitemap.xml");
        assert_eq!(strip_extension("foo.txt"), "foo");
        assert_eq!(strip_extension(".env"), ".env");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("./routes/about.tsx"), "about");
        assert_eq!(file_stem("./routes/blog/index.tsx"), "index");
        assert_eq!(file_stem("./routes/sitemap.xml.ts"), "sitemap.xml");
        assert_eq!(file_stem("foo.txt"), "foo");
    }

    #[test]
    fn test_dynamic_segments() {
        assert!(is_dynamic("[id]"));
        assert!(is_dynamic("[slug]"));
        assert!(!is_dynamic("[]"));
        assert!(!is_dynamic("about"));
        assert!(!is_dynamic("[half"));
        assert!(!is_dynamic("half]"));
    }

    #[test]
    fn test_is_listable() {
        let ignore = vec!["sitemap.xml".to_string()];

        assert!(is_listable("./routes/about.tsx", &ignore));
        assert!(is_listable("./routes/index.tsx", &ignore));
        assert!(!is_listable("./routes/[id].tsx", &ignore));
        assert!(!is_listable("./routes/_layout.tsx", &ignore));
        assert!(!is_listable("./routes/_404.tsx", &ignore));
        // The sitemap never lists itself. The ignore entry matches the file
        // name after only the final extension is stripped.
        assert!(!is_listable("./routes/sitemap.xml.ts", &ignore));
    }

    #[test]
    fn test_normalize_root_index() {
        assert_eq!(normalize("./routes/index.tsx"), "/");
    }

    #[test]
    fn test_normalize_regular_route() {
        assert_eq!(normalize("./routes/about.tsx"), "/about");
        assert_eq!(normalize("./routes/blog/hello.tsx"), "/blog/hello");
    }

    #[test]
    fn test_normalize_nested_index() {
        assert_eq!(normalize("./routes/blog/index.tsx"), "/blog/");
    }

    #[test]
    fn test_normalize_keeps_index_prefix_names() {
        assert_eq!(normalize("./routes/indexes.tsx"), "/indexes");
    }

    #[test]
    fn test_normalize_always_starts_with_slash() {
        for path in ["routes/about.tsx", "about.tsx", "./other/page.tsx"] {
            let normalized = normalize(path);
            assert!(
                normalized.starts_with('/'),
                "{path} normalized to {normalized}"
            );
        }
    }

    #[test]
    fn test_normalize_strips_prefix_and_extension() {
        let normalized = normalize("./routes/docs/setup.tsx");
        assert!(!normalized.contains("./routes"));
        assert!(!normalized.contains(".tsx"));
        assert_eq!(normalized, "/docs/setup");
    }
}
