//! Analysis-service configuration.
//!
//! The base URL of the analysis service is supplied at build time through the
//! `CINEMAMATCH_API_URL` environment variable. There is no other external
//! configuration surface: no CLI, no config file, no persisted state.

/// Fallback base URL used when `CINEMAMATCH_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Resolve the base URL of the analysis service.
///
/// Reads the compile-time `CINEMAMATCH_API_URL` environment variable and falls
/// back to [`DEFAULT_API_URL`]. Trailing slashes are stripped so endpoint
/// paths can be appended uniformly.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("CINEMAMATCH_API_URL").unwrap_or(DEFAULT_API_URL))
}

/// Strip trailing slashes from a base URL.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:8000/"),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_base_url("https://api.example.com///"),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_normalize_leaves_clean_url_unchanged() {
        assert_eq!(
            normalize_base_url("http://localhost:8000"),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_api_base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }
}
