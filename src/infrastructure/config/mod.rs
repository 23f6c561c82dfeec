use anyhow::Context;
use serde::Deserialize;
use std::env;

use crate::domain::suggestions::accumulator::MAX_ATTEMPTS;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // OpenAI
    pub openai_api_key: String,
    pub openai_model: String,
    // Sessions
    pub session_ttl_minutes: u64,
    pub max_sessions: u64,
    // Suggestions
    pub suggestion_max_attempts: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Attempt cap per suggestion request, at least one and never above the built-in ceiling
fn parse_max_attempts(raw: &str) -> anyhow::Result<usize> {
    let attempts: usize = raw
        .parse()
        .context("SUGGESTION_MAX_ATTEMPTS must be a number")?;
    if !(1..=MAX_ATTEMPTS).contains(&attempts) {
        anyhow::bail!(
            "SUGGESTION_MAX_ATTEMPTS must be between 1 and {}, got {}",
            MAX_ATTEMPTS,
            attempts
        );
    }
    Ok(attempts)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: var_or("HOST", "0.0.0.0"),
            port: var_or("PORT", "8080").parse().context("PORT must be a port number")?,
            environment: match var_or("ENVIRONMENT", "development").as_str() {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match var_or("LOG_FORMAT", "pretty").as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            openai_api_key: env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?,
            openai_model: var_or("OPENAI_MODEL", "gpt-4o-mini"),
            session_ttl_minutes: var_or("SESSION_TTL_MINUTES", "60")
                .parse()
                .context("SESSION_TTL_MINUTES must be a number")?,
            max_sessions: var_or("MAX_SESSIONS", "1000")
                .parse()
                .context("MAX_SESSIONS must be a number")?,
            suggestion_max_attempts: parse_max_attempts(&var_or(
                "SUGGESTION_MAX_ATTEMPTS",
                &MAX_ATTEMPTS.to_string(),
            ))?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
