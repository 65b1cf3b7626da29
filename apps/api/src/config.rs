use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Missing required variables abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub sendgrid_api_key: String,
    pub from_email: String,
    pub readings_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            sendgrid_api_key: require_env("SENDGRID_API_KEY")?,
            from_email: std::env::var("FROM_EMAIL")
                .unwrap_or_else(|_| "noreply@soulmate.app".to_string()),
            readings_dir: std::env::var("READINGS_DIR").unwrap_or_else(|_| "readings".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
