//! Bundled chrome assets served over the `nebula://` protocol.
//!
//! A request for `nebula://localhost/chrome/index.html` resolves to
//! `{base_dir}/chrome/index.html`; no local HTTP server is involved.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Custom protocol scheme for bundled assets.
pub const SCHEME: &str = "nebula";

/// Entry page of every window's chrome surface.
pub const CHROME_URL: &str = "nebula://localhost/chrome/index.html";

/// Serves files below a base directory.
pub struct ContentProvider {
    base_dir: PathBuf,
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a request path to its MIME type and bytes.
    ///
    /// Paths escaping the base directory, through `..` or symlinks, resolve
    /// to `None`.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.split(['?', '#']).next().unwrap_or("");
        let clean = clean.trim_start_matches('/');

        let file_path = self.base_dir.join(clean);
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Strip the scheme and host off a `nebula://` request URI.
///
/// WebView2 rewrites custom schemes to `http://nebula.localhost/`, so that
/// form is accepted too.
pub fn request_path(uri: &str) -> &str {
    ["nebula://localhost/", "http://nebula.localhost/", "https://nebula.localhost/", "nebula://"]
        .iter()
        .find_map(|prefix| uri.strip_prefix(prefix))
        .unwrap_or("")
}

fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
