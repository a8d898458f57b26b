//! Deployment base path handling.
//!
//! The reader can be hosted under a sub-directory (e.g. `/reader`). The
//! prefix is baked in at compile time through `PUBLIC_URL`; it becomes the
//! router basename so `/ebook/:file_name` keeps matching, and it prefixes
//! every bundled asset URL so routes and assets always share a base.

fn configured_base() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn normalize(base: &str) -> Option<String> {
    let trimmed = base.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn join(base: Option<&str>, relative: &str) -> String {
    let rel = relative.trim_start_matches('/');
    match base {
        Some(prefix) => format!("{prefix}/{rel}"),
        None => format!("/{rel}"),
    }
}

/// Basename handed to `BrowserRouter`.
///
/// `None` when no prefix is configured, so routes anchor at the host root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize(configured_base())
}

/// URL for a bundled static asset under the configured base.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join(router_base().as_deref(), relative)
}
