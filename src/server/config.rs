use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Addresses granted admin rights at startup, parsed from comma-separated `ADMIN_EMAILS`.
    pub admin_emails: Vec<String>,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            admin_emails: std::env::var("ADMIN_EMAILS")
                .map(|value| parse_admin_emails(&value))
                .unwrap_or_default(),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

/// Splits a comma-separated list of addresses, dropping blanks and surrounding whitespace.
pub fn parse_admin_emails(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .collect()
}
