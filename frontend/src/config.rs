use web_sys::window;

/// Backend origin. Served from the same host in production; `trunk serve`
/// on port 8080 talks to the API on port 3000.
pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        let location = window.location();
        if let (Ok(host), Ok(port)) = (location.hostname(), location.port()) {
            let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());

            if port == "8080" {
                return format!("{}//{}:3000", protocol, host);
            }
            if let Ok(host_with_port) = location.host() {
                return format!("{}//{}", protocol, host_with_port);
            }
        }
    }

    "http://127.0.0.1:3000".to_string()
}
