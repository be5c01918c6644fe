use secrecy::SecretString;
use std::env;
use std::time::Duration;

const MIN_MODEL_TIMEOUT_SECS: u64 = 5;
const MAX_MODEL_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, Debug)]
pub struct Config {
    /// Absent credential disables AI generation instead of crashing;
    /// the fallback generators keep the app usable.
    pub api_key: Option<SecretString>,
    pub api_url: String,
    pub model_name: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub model_timeout_secs: u64,
    pub transport_retries: u32,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("DEEPSEEK_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            api_url: env::var("DEEPSEEK_API_URL")
                .unwrap_or_else(|_| "https://api.deepseek.com/v1/chat/completions".to_string()),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| "deepseek-chat".to_string()),
            temperature: env::var("MODEL_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.3),
            max_tokens: env::var("MODEL_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(1500),
            model_timeout_secs: env::var("MODEL_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(40)
                .clamp(MIN_MODEL_TIMEOUT_SECS, MAX_MODEL_TIMEOUT_SECS),
            transport_retries: env::var("MODEL_TRANSPORT_RETRIES")
                .ok()
                .and_then(|r| r.parse().ok())
                .unwrap_or(2),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Bounded wait for one outbound model call. An unbounded wait would
    /// block the user action indefinitely, so the value is clamped.
    pub fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout_secs)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_key: None,
            api_url: "http://localhost:9/chat/completions".to_string(),
            model_name: "deepseek-chat".to_string(),
            temperature: 0.3,
            max_tokens: 1500,
            model_timeout_secs: 5,
            transport_retries: 0,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.api_url.is_empty());
        assert!(!config.model_name.is_empty());
        assert!(config.model_timeout_secs >= MIN_MODEL_TIMEOUT_SECS);
        assert!(config.model_timeout_secs <= MAX_MODEL_TIMEOUT_SECS);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert!(config.api_key.is_none());
        assert_eq!(config.model_name, "deepseek-chat");
        assert_eq!(config.model_timeout(), Duration::from_secs(5));
    }
}
