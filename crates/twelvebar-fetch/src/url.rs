//! Twelve Data URL construction.

/// Base URL of the Twelve Data REST API.
pub const BASE_URL: &str = "https://api.twelvedata.com";

/// Path of the time series endpoint.
pub const TIME_SERIES_PATH: &str = "/time_series";

/// Builds the time series endpoint URL for a base URL.
///
/// Trailing slashes on the base are ignored. Query parameters are added by
/// the client so that they get percent-encoded.
///
/// # Example
///
/// ```
/// use twelvebar_fetch::url::time_series_url;
///
/// assert_eq!(
///     time_series_url("https://api.twelvedata.com/"),
///     "https://api.twelvedata.com/time_series"
/// );
/// ```
#[must_use]
pub fn time_series_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), TIME_SERIES_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        assert_eq!(
            time_series_url(BASE_URL),
            "https://api.twelvedata.com/time_series"
        );
    }

    #[test]
    fn test_custom_base_with_slashes() {
        assert_eq!(
            time_series_url("http://127.0.0.1:8080//"),
            "http://127.0.0.1:8080/time_series"
        );
    }
}
