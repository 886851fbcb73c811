//! Helpers for building requests to the orders API.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Append an already encoded query string to a base URL
///
/// # Example
/// ```ignore
/// let url = with_query("https://api.example.com/", "pageIndex=2");
/// assert_eq!(url, "https://api.example.com/?pageIndex=2");
/// ```
pub fn with_query(base_url: &str, query: &str) -> String {
    if query.is_empty() {
        return base_url.to_string();
    }
    let separator = if !base_url.contains('?') {
        "?"
    } else if base_url.ends_with('?') || base_url.ends_with('&') {
        ""
    } else {
        "&"
    };
    format!("{}{}{}", base_url, separator, query)
}

/// Value of the `Authorization` header for HTTP Basic auth
pub fn basic_auth_header(username: &str, password: &str) -> String {
    let token = STANDARD.encode(format!("{}:{}", username, password));
    format!("Basic {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query() {
        assert_eq!(
            with_query("https://api.example.com/", "pageIndex=2"),
            "https://api.example.com/?pageIndex=2"
        );
        assert_eq!(
            with_query("https://api.example.com/?tenant=1", "pageIndex=0"),
            "https://api.example.com/?tenant=1&pageIndex=0"
        );
        assert_eq!(
            with_query("https://api.example.com/?", "pageIndex=0"),
            "https://api.example.com/?pageIndex=0"
        );
        assert_eq!(with_query("https://api.example.com/", ""), "https://api.example.com/");
    }

    #[test]
    fn test_basic_auth_header() {
        assert_eq!(basic_auth_header("admin", "1234abcd"), "Basic YWRtaW46MTIzNGFiY2Q=");
        assert_eq!(basic_auth_header("user", ""), "Basic dXNlcjo=");
    }
}
