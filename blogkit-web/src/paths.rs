//! Helpers for constructing site URLs that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/blog` for a project page),
/// generated URLs are prefixed accordingly. Builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn site_path(relative: &str) -> String {
    site_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn site_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::{site_path, site_path_with_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(site_path("sw.js"), "/sw.js");
        assert_eq!(site_path("/sw.js"), "/sw.js");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(site_path_with_base("sw.js", "/blog"), "/blog/sw.js");
        assert_eq!(site_path_with_base("/sw.js", "/blog/"), "/blog/sw.js");
    }
}
