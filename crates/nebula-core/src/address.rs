//! Address bar input normalisation.

use url::Url;

/// Schemes accepted verbatim from the address bar.
const PASSTHROUGH_PREFIXES: &[&str] = &["about:", "data:", "file://", "nebula://"];

/// Prefix `https://` unless the input already names http or https.
pub fn ensure_protocol(input: &str) -> String {
    let lower = input.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

/// Turn address bar input into a URL: either the input itself (with a scheme
/// added) or a search for it using `search_template`'s `{query}` slot.
pub fn resolve_input(input: &str, search_template: &str) -> String {
    let input = input.trim();
    let lower = input.to_ascii_lowercase();
    if PASSTHROUGH_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return input.to_string();
    }

    if !input.is_empty() && !input.chars().any(char::is_whitespace) {
        let candidate = ensure_protocol(input);
        if let Ok(url) = Url::parse(&candidate) {
            if url.host_str().is_some_and(looks_like_host) {
                return candidate;
            }
        }
    }

    search_template.replace("{query}", &urlencoding::encode(input))
}

/// A bare word like `rust` parses as a host, but the user meant a search.
fn looks_like_host(host: &str) -> bool {
    host.contains('.') || host.eq_ignore_ascii_case("localhost") || host.starts_with('[')
}

/// Host part of a URL, or the input unchanged if it does not parse.
pub fn extract_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

pub fn is_secure(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| u.scheme() == "https")
}
