use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails before the listener binds if required variables are missing,
/// so no pipeline run is ever reachable without a generation credential.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_names_the_missing_variable() {
        let err = require_env("HIREME_TEST_VARIABLE_THAT_IS_NEVER_SET").unwrap_err();
        assert!(err
            .to_string()
            .contains("HIREME_TEST_VARIABLE_THAT_IS_NEVER_SET"));
    }
}
