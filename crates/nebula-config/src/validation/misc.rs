//! Validation for the shell and webview sections.

use crate::schema::NebulaConfig;

use super::helpers::validate_scheme;

pub(crate) fn validate_shell(errors: &mut Vec<String>, config: &NebulaConfig) {
    validate_scheme(
        errors,
        "shell.home_url",
        &config.shell.home_url,
        &["http://", "https://", "about:"],
    );
    validate_scheme(
        errors,
        "shell.search_url",
        &config.shell.search_url,
        &["http://", "https://"],
    );
    if !config.shell.search_url.contains("{query}") {
        errors.push("shell.search_url must contain {query}".into());
    }
}

pub(crate) fn validate_webview(errors: &mut Vec<String>, config: &NebulaConfig) {
    if let Some(ua) = &config.webview.user_agent {
        if ua.trim().is_empty() {
            errors.push("webview.user_agent must not be blank; omit it for the default".into());
        }
    }
}
