//! API utilities for frontend-backend communication
//!
//! The backend listens on a fixed port next to whatever host served the page.

/// Port the backend server is bound to
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_for(&protocol, &hostname)
}

fn base_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Join a base URL and an API path ("/api/..."), tolerating a trailing slash
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_for() {
        assert_eq!(base_for("https:", "admin.local"), "https://admin.local:3000");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://h:3000/", "/api/options/venue"),
            "http://h:3000/api/options/venue"
        );
        assert_eq!(join_url("", "/api/x"), "/api/x");
    }
}
