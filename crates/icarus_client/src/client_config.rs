use tracing::debug;

pub const API_URL_ENV_VAR: &str = "ICARUS_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/optimize";
pub const ENV_FILE: &str = "./.env.local";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads `.env.local` when present, then reads the process environment.
    /// Variables already set in the environment take precedence over the file.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::from_filename(ENV_FILE) {
            debug!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = non_empty(lookup(API_URL_ENV_VAR))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self { api_url }
    }

    /// Overrides the endpoint. Blank values leave it unchanged.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(api_url) = non_empty(api_url) {
            self.api_url = api_url;
        }
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
