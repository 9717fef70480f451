use anyhow::{Context, Result};

const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Application configuration loaded from environment variables.
/// Startup fails if the provider credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub anthropic_base_url: String,
    pub llm_timeout_secs: u64,
    pub session_idle_ttl_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            anthropic_base_url: std::env::var("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_BASE_URL.to_string()),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            session_idle_ttl_secs: std::env::var("SESSION_IDLE_TTL_SECS")
                .unwrap_or_else(|_| "7200".to_string())
                .parse::<u64>()
                .context("SESSION_IDLE_TTL_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_missing_names_the_variable() {
        let err = require_env("DISHACOACH_TEST_UNSET_VARIABLE").unwrap_err();
        assert!(err.to_string().contains("DISHACOACH_TEST_UNSET_VARIABLE"));
    }

    #[test]
    fn test_require_env_rejects_blank_value() {
        std::env::set_var("DISHACOACH_TEST_BLANK_VARIABLE", "   ");
        assert!(require_env("DISHACOACH_TEST_BLANK_VARIABLE").is_err());
        std::env::remove_var("DISHACOACH_TEST_BLANK_VARIABLE");
    }
}
