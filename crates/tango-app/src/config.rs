use std::env;

use tango_jisho::client::DEFAULT_API_URL;

/// Runtime settings, sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Keyword-search endpoint of the dictionary service.
    pub api_url: String,
    /// Cap on simultaneous in-flight lookups; 0 disables the cap.
    pub max_in_flight: usize,
    /// Cell count of the rendered progress bar.
    pub progress_width: usize,
    /// External segmenter command.
    pub mecab_command: String,
}

impl Config {
    pub fn new() -> Self {
        let api_url = env::var("TANGO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let max_in_flight = env::var("TANGO_MAX_IN_FLIGHT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0); // unbounded by default

        let progress_width = env::var("TANGO_PROGRESS_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        let mecab_command = env::var("TANGO_MECAB").unwrap_or_else(|_| "mecab".to_string());

        Config {
            api_url,
            max_in_flight,
            progress_width,
            mecab_command,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
