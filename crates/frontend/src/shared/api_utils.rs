//! API utilities for frontend-backend communication
//!
//! The backend always listens on [`BACKEND_PORT`] of the host serving the page.

pub const BACKEND_PORT: u16 = 3000;

fn base_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Base URL for API requests, e.g. `http://localhost:3000`
///
/// Empty when there is no window, which turns every URL into a relative one.
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

/// Build a full API URL from a path starting with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_uses_backend_port() {
        assert_eq!(base_for("http:", "localhost"), "http://localhost:3000");
        assert_eq!(base_for("https:", "tienda.local"), "https://tienda.local:3000");
    }
}
