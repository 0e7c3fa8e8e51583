/// Join a base URL and a request path.
/// Paths that are already absolute URLs pass through untouched.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path() {
        assert_eq!(
            absolute_url("https://api.tribeapp.com", "/api/permissions/users"),
            "https://api.tribeapp.com/api/permissions/users"
        );
    }

    #[test]
    fn tolerates_missing_and_doubled_slashes() {
        assert_eq!(
            absolute_url("https://api.tribeapp.com/", "api/permissions"),
            "https://api.tribeapp.com/api/permissions"
        );
        assert_eq!(
            absolute_url("https://api.tribeapp.com/", "//api/permissions"),
            "https://api.tribeapp.com/api/permissions"
        );
    }

    #[test]
    fn absolute_paths_pass_through() {
        assert_eq!(
            absolute_url("https://api.tribeapp.com", "https://other.example/x"),
            "https://other.example/x"
        );
    }

    #[test]
    fn empty_path_returns_base() {
        assert_eq!(
            absolute_url("https://api.tribeapp.com/", "/"),
            "https://api.tribeapp.com"
        );
    }
}
