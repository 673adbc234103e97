//! Configuration constants and utilities for feedline.

use std::time::Duration;

/// Base URL of the remote feed API.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Environment variable name for overriding the API base URL.
pub const BASE_URL_ENV_VAR: &str = "FEEDLINE_BASE_URL";

/// How long a show-loading intent must survive before the busy visual
/// actually appears. Requests faster than this never flash the spinner.
pub const SHOW_DELAY: Duration = Duration::from_millis(1000);

/// Log file written when `RUST_LOG` is set. Stdout belongs to the TUI.
pub const LOG_FILE: &str = "feedline.log";

/// Get the API base URL, checking the environment variable first, then
/// falling back to the default.
pub fn get_base_url() -> String {
    std::env::var_os(BASE_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(DEFAULT_BASE_URL, "https://dummyjson.com");
    }

    #[test]
    fn test_get_base_url_env_override() {
        // Save current env var state
        let original = std::env::var_os(BASE_URL_ENV_VAR);

        let test_url = "http://127.0.0.1:8080";
        std::env::set_var(BASE_URL_ENV_VAR, test_url);
        assert_eq!(get_base_url(), test_url);

        // Restore original state
        match original {
            Some(val) => std::env::set_var(BASE_URL_ENV_VAR, val),
            None => std::env::remove_var(BASE_URL_ENV_VAR),
        }
    }
}
