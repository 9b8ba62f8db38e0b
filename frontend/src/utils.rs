use web_sys::window;

/// Get the base HTTP URL (e.g., "http://localhost:3000" or "https://myapp.com")
///
/// Empty outside a browser, which leaves API paths relative.
pub fn get_base_url() -> String {
    let Some(window) = window() else {
        return String::new();
    };
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:3000".to_string());

    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path (e.g., "/api/dashboard_data" -> "http://localhost:3000/api/dashboard_data")
pub fn api_url(path: &str) -> String {
    format!("{}{}", get_base_url(), path)
}
